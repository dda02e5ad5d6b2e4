use super::{
    extension::{decode_extension, ExtendedFormat},
    flags::Capability,
    header::{decode_header, PrimaryHeader},
};
use crate::cursor::ByteCursor;
use crate::error::DecodeResult;
use crate::options::DecodeOptions;
use crate::resolve::resolve_format;
use dds_surface_formats::DxgiFormat;

/// Everything decoded from the headers of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metadata {
    pub header: PrimaryHeader,
    /// The DX10 header, present if and only if the pixel format's FourCC is `DX10`.
    pub extension: Option<ExtendedFormat>,
    /// Absolute position of the first byte of pixel data.
    pub payload_offset: u64,
}

impl Metadata {
    /// Whether the file declares a mip chain.
    ///
    /// Requires both a non-zero `mip_map_count` and the [`Capability::MipMap`] capability.
    #[inline]
    pub fn has_mips(&self) -> bool {
        self.header.mip_map_count > 0 && self.header.has_capability(Capability::MipMap)
    }

    /// The resolved pixel format of the payload.
    ///
    /// See [`resolve_format`].
    pub fn format(&self) -> DxgiFormat {
        resolve_format(&self.header.pixel_format, self.extension.as_ref())
    }
}

/// Reads the primary header and, when signalled, the DX10 header.
///
/// On success the cursor sits at [`Metadata::payload_offset`].
pub fn read_metadata<C: ByteCursor>(
    cursor: &mut C,
    options: DecodeOptions,
) -> DecodeResult<Metadata> {
    let header = decode_header(cursor, options.magic)?;
    let extension = if header.pixel_format.has_extension() {
        Some(decode_extension(cursor)?)
    } else {
        None
    };

    Ok(Metadata {
        header,
        extension,
        payload_offset: cursor.position(),
    })
}
