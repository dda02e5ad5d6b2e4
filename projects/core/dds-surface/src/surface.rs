//! The decoded surface and the decode entry points.

use crate::cursor::{ByteCursor, SharedCursor};
use crate::dds::{read_metadata, Metadata};
use crate::error::DecodeResult;
use crate::mips::{plan_mips, MipLevel};
use crate::options::DecodeOptions;
use dds_surface_formats::DxgiFormat;
use std::sync::{Arc, Mutex};

/// A decoded DDS file: its headers and its mip levels.
///
/// Immutable once decoded. The levels share the cursor the surface was decoded from,
/// and read from it on demand.
#[derive(Debug)]
pub struct Surface<C> {
    metadata: Metadata,
    format: DxgiFormat,
    mips: Vec<MipLevel<C>>,
}

impl<C> Surface<C> {
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The resolved format of the payload.
    #[inline]
    pub fn format(&self) -> DxgiFormat {
        self.format
    }

    /// Width of the base level, as declared in the header.
    #[inline]
    pub fn width(&self) -> u32 {
        self.metadata.header.width
    }

    /// Height of the base level, as declared in the header.
    #[inline]
    pub fn height(&self) -> u32 {
        self.metadata.header.height
    }

    /// Number of mip levels; 0 when the file does not declare a mip chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.mips.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mips.is_empty()
    }

    /// The mip level with the given index.
    #[inline]
    pub fn get(&self, level: usize) -> Option<&MipLevel<C>> {
        self.mips.get(level)
    }

    /// Mip levels from largest to smallest.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, MipLevel<C>> {
        self.mips.iter()
    }

    #[inline]
    pub fn mips(&self) -> &[MipLevel<C>] {
        &self.mips
    }

    /// Total bytes spanned by all mip levels.
    pub fn payload_len(&self) -> u64 {
        self.mips.iter().map(|mip| mip.size() as u64).sum()
    }
}

impl<'a, C> IntoIterator for &'a Surface<C> {
    type Item = &'a MipLevel<C>;
    type IntoIter = core::slice::Iter<'a, MipLevel<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.mips.iter()
    }
}

impl<C> IntoIterator for Surface<C> {
    type Item = MipLevel<C>;
    type IntoIter = std::vec::IntoIter<MipLevel<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.mips.into_iter()
    }
}

/// Decodes a DDS file from the current position of `cursor`.
///
/// Reads the headers, resolves the format and plans every mip level. No pixel data is
/// read; see [`MipLevel::read`].
///
/// # Errors
///
/// Any [`DecodeError`](crate::DecodeError) except
/// [`OutputBufferTooSmall`](crate::DecodeError::OutputBufferTooSmall). No surface is
/// returned on error.
pub fn decode<C: ByteCursor>(cursor: C) -> DecodeResult<Surface<C>> {
    decode_with_options(cursor, DecodeOptions::default())
}

/// [`decode`] with explicit [`DecodeOptions`].
pub fn decode_with_options<C: ByteCursor>(
    mut cursor: C,
    options: DecodeOptions,
) -> DecodeResult<Surface<C>> {
    let metadata = read_metadata(&mut cursor, options)?;
    let format = metadata.format();

    let shared: SharedCursor<C> = Arc::new(Mutex::new(cursor));
    let mips = plan_mips(&metadata, format, &shared)?;

    Ok(Surface {
        metadata,
        format,
        mips,
    })
}
