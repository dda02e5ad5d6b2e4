use super::{constants::*, flags::*};
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, DecodeResult};
use crate::options::MagicCheck;
use dds_surface_formats::FourCC;
use endian_writer::{EndianReader, LittleEndianReader};
use tracing::debug;

/// The 32 byte `DDS_PIXELFORMAT` structure nested in the primary header.
///
/// Which members are meaningful depends on [`flags`](Self::flags): the FourCC for
/// [`PixelFormatFlag::FourCC`], the bit count and masks for the uncompressed kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormatDescriptor {
    pub size: u32,
    pub flags: FlagSet<PixelFormatFlag>,
    pub four_cc: FourCC,
    pub bit_count: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
}

impl PixelFormatDescriptor {
    #[inline]
    pub fn has_flag(&self, flag: PixelFormatFlag) -> bool {
        self.flags.contains(flag)
    }

    /// Whether a DX10 header follows the primary header.
    #[inline]
    pub fn has_extension(&self) -> bool {
        self.four_cc == FourCC::DX10
    }
}

/// The 124 byte `DDS_HEADER`. Reserved words are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimaryHeader {
    /// Declared header size. Not validated; 124 in well formed files.
    pub size: u32,
    pub flags: FlagSet<HeaderFlag>,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_map_count: u32,
    pub pixel_format: PixelFormatDescriptor,
    pub caps: FlagSet<Capability>,
    pub caps2: FlagSet<Capability2>,
}

impl PrimaryHeader {
    #[inline]
    pub fn has_flag(&self, flag: HeaderFlag) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.caps.contains(capability)
    }

    #[inline]
    pub fn has_capability2(&self, capability: Capability2) -> bool {
        self.caps2.contains(capability)
    }
}

/// Reads the magic and the primary header from the current position of `cursor`.
///
/// Leaves the cursor right after the header, 128 bytes past where it started.
///
/// # Errors
///
/// - [`DecodeError::BadMagic`] if the magic is not `"DDS "` and `magic` is [`MagicCheck::Verify`].
/// - [`DecodeError::Truncated`] if the source ends within the 128 bytes.
pub fn decode_header<C: ByteCursor>(
    cursor: &mut C,
    magic: MagicCheck,
) -> DecodeResult<PrimaryHeader> {
    let mut data = [0u8; DDS_HEADER_SIZE];

    let (magic_bytes, header_bytes) = data.split_at_mut(DDS_MAGIC_SIZE);
    cursor.read_exact_into(magic_bytes)?;
    if magic == MagicCheck::Verify && magic_bytes[..] != DDS_MAGIC_BYTES[..] {
        let mut found = [0u8; DDS_MAGIC_SIZE];
        found.copy_from_slice(magic_bytes);
        return Err(DecodeError::BadMagic { found });
    }
    cursor.read_exact_into(header_bytes)?;

    let header = parse_header(&data);
    debug!(
        width = header.width,
        height = header.height,
        mip_map_count = header.mip_map_count,
        four_cc = %header.pixel_format.four_cc,
        "decoded DDS header"
    );
    Ok(header)
}

fn parse_header(data: &[u8; DDS_HEADER_SIZE]) -> PrimaryHeader {
    let mut four_cc = [0u8; 4];
    four_cc.copy_from_slice(&data[DDS_PIXELFORMAT_FOURCC_OFFSET..DDS_PIXELFORMAT_FOURCC_OFFSET + 4]);

    // SAFETY: `data` is exactly DDS_HEADER_SIZE (128) bytes, and every offset read
    // below is at most DDS_CAPS2_OFFSET (0x70), so each 4 byte read is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe {
        PrimaryHeader {
            size: reader.read_u32_at(DDS_SIZE_OFFSET as isize),
            flags: FlagSet::from_bits_lenient(reader.read_u32_at(DDS_FLAGS_OFFSET as isize)),
            height: reader.read_u32_at(DDS_HEIGHT_OFFSET as isize),
            width: reader.read_u32_at(DDS_WIDTH_OFFSET as isize),
            pitch_or_linear_size: reader.read_u32_at(DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize),
            depth: reader.read_u32_at(DDS_DEPTH_OFFSET as isize),
            mip_map_count: reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize),
            pixel_format: PixelFormatDescriptor {
                size: reader.read_u32_at(DDS_PIXELFORMAT_OFFSET as isize),
                flags: FlagSet::from_bits_lenient(
                    reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize),
                ),
                four_cc: FourCC(four_cc),
                bit_count: reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
                red_mask: reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
                green_mask: reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
                blue_mask: reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
                alpha_mask: reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
            },
            caps: FlagSet::from_bits_lenient(reader.read_u32_at(DDS_CAPS_OFFSET as isize)),
            caps2: FlagSet::from_bits_lenient(reader.read_u32_at(DDS_CAPS2_OFFSET as isize)),
        }
    }
}
