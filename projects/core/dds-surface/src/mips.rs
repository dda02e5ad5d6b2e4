//! Mip level planning and deferred reads.

use crate::cursor::{lock_cursor, ByteCursor, SharedCursor};
use crate::dds::Metadata;
use crate::error::{DecodeError, DecodeResult};
use core::fmt;
use dds_surface_formats::DxgiFormat;
use std::sync::Arc;
use tracing::trace;

/// How many bytes a level of a given format occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSize {
    /// `ceil(w / 4) * ceil(h / 4) * bytes`; block-compressed formats.
    Blocks(u32),
    /// `w * h * bytes`.
    Texels(u32),
}

impl LevelSize {
    /// Picks the size rule for `format`.
    ///
    /// - Block-compressed formats use their block size.
    /// - Packed and planar video formats use their storage unit per texel.
    /// - Other formats use their bits per pixel, when that is a whole, non-zero number of bytes.
    /// - [`DxgiFormat::UNKNOWN`] falls back to the pixel format's `bit_count`, under the same rule.
    ///
    /// Anything else fails with [`DecodeError::UnsupportedFormat`].
    pub fn for_format(format: DxgiFormat, legacy_bit_count: u32) -> DecodeResult<Self> {
        if let Some(bytes) = format.bytes_per_block() {
            return Ok(match format.is_compressed_block() {
                true => Self::Blocks(bytes),
                false => Self::Texels(bytes),
            });
        }

        let bits = match format.is_unknown() {
            true => legacy_bit_count,
            false => format.bits_per_pixel(),
        };
        match bits {
            0 => Err(DecodeError::UnsupportedFormat(format)),
            bits if bits % 8 != 0 => Err(DecodeError::UnsupportedFormat(format)),
            bits => Ok(Self::Texels(bits / 8)),
        }
    }

    /// Bytes a `width` x `height` level occupies, or [`None`] on overflow.
    pub fn level_bytes(self, width: u32, height: u32) -> Option<u64> {
        match self {
            Self::Blocks(bytes) => u64::from(width.div_ceil(4))
                .checked_mul(u64::from(height.div_ceil(4)))?
                .checked_mul(u64::from(bytes)),
            Self::Texels(bytes) => u64::from(width)
                .checked_mul(u64::from(height))?
                .checked_mul(u64::from(bytes)),
        }
    }
}

enum LevelSource<C> {
    Cursor(SharedCursor<C>),
    Bytes(Arc<[u8]>),
}

impl<C> Clone for LevelSource<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Cursor(cursor) => Self::Cursor(Arc::clone(cursor)),
            Self::Bytes(bytes) => Self::Bytes(Arc::clone(bytes)),
        }
    }
}

/// A single mip level: its dimensions, where its bytes are, and a way to read them.
///
/// Levels decoded from a file hold a handle to the file's shared cursor. Nothing is
/// read until [`read`](Self::read) or [`read_into`](Self::read_into) is called, and
/// nothing is cached: each call seeks and reads again.
pub struct MipLevel<C> {
    level: u32,
    width: u32,
    height: u32,
    offset: u64,
    size: usize,
    source: LevelSource<C>,
}

impl<C> MipLevel<C> {
    /// A level whose bytes are already in memory.
    ///
    /// Its [`offset`](Self::offset) is 0 and its [`size`](Self::size) is the length of `bytes`.
    pub fn from_bytes(level: u32, width: u32, height: u32, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        Self {
            level,
            width,
            height,
            offset: 0,
            size: bytes.len(),
            source: LevelSource::Bytes(bytes),
        }
    }

    /// Index of the level; 0 is the full size surface.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Absolute position of the level's first byte within the source.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Length of the level in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<C: ByteCursor> MipLevel<C> {
    /// Reads the level's bytes.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Truncated`] if the source ends before the level does, or any error
    /// of the underlying cursor. A failed read does not affect other levels.
    pub fn read(&self) -> DecodeResult<Vec<u8>> {
        let cursor = match &self.source {
            LevelSource::Cursor(cursor) => cursor,
            LevelSource::Bytes(bytes) => return Ok(bytes.to_vec()),
        };

        let mut cursor = lock_cursor(cursor);
        self.seek_to_level(&mut *cursor)?;
        let mut buf = vec![0u8; self.size];
        cursor.read_exact_into(&mut buf)?;
        Ok(buf)
    }

    /// Reads the level's bytes into the start of `buf`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read), plus [`DecodeError::OutputBufferTooSmall`] if `buf` is shorter
    /// than [`size`](Self::size).
    pub fn read_into(&self, buf: &mut [u8]) -> DecodeResult<usize> {
        let actual = buf.len();
        let Some(buf) = buf.get_mut(..self.size) else {
            return Err(DecodeError::OutputBufferTooSmall {
                required: self.size,
                actual,
            });
        };

        match &self.source {
            LevelSource::Cursor(cursor) => {
                let mut cursor = lock_cursor(cursor);
                self.seek_to_level(&mut *cursor)?;
                cursor.read_exact_into(buf)?;
            }
            LevelSource::Bytes(bytes) => buf.copy_from_slice(bytes),
        }
        Ok(self.size)
    }

    // The size comes from header dimensions, so it is checked against the source
    // before anything is allocated for it.
    fn seek_to_level(&self, cursor: &mut C) -> DecodeResult<()> {
        trace!(
            level = self.level,
            offset = self.offset,
            size = self.size,
            "reading mip level"
        );
        let end = self.offset.saturating_add(self.size as u64);
        if end > cursor.source_len()? {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                requested: self.size,
            });
        }
        cursor.seek(self.offset)
    }
}

impl<C> Clone for MipLevel<C> {
    fn clone(&self) -> Self {
        Self {
            level: self.level,
            width: self.width,
            height: self.height,
            offset: self.offset,
            size: self.size,
            source: self.source.clone(),
        }
    }
}

impl<C> fmt::Debug for MipLevel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MipLevel")
            .field("level", &self.level)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("offset", &self.offset)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Computes every mip level of the surface described by `metadata`.
///
/// Returns no levels unless [`Metadata::has_mips`] holds. Otherwise one level per
/// `mip_map_count`, starting at `payload_offset`, each level's dimensions being half of
/// the previous one (clamped to 1). Planning stops early once both dimensions reach 0
/// before clamping.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] if no [`LevelSize`] rule applies to `format`.
/// - [`DecodeError::LevelSizeOverflow`] if a level's size or end offset does not fit.
pub fn plan_mips<C>(
    metadata: &Metadata,
    format: DxgiFormat,
    cursor: &SharedCursor<C>,
) -> DecodeResult<Vec<MipLevel<C>>> {
    if !metadata.has_mips() {
        return Ok(Vec::new());
    }

    let header = &metadata.header;
    let rule = LevelSize::for_format(format, header.pixel_format.bit_count)?;

    let mut mips = Vec::new();
    let (mut width, mut height) = (header.width, header.height);
    let mut offset = metadata.payload_offset;
    let mut level = 0u32;
    while level < header.mip_map_count && (width > 0 || height > 0) {
        let (w, h) = (width.max(1), height.max(1));
        let overflow = || DecodeError::LevelSizeOverflow { level };

        let size = rule.level_bytes(w, h).ok_or_else(overflow)?;
        let size_usize = usize::try_from(size).map_err(|_| overflow())?;
        trace!(level, width = w, height = h, offset, size, "planned mip level");

        mips.push(MipLevel {
            level,
            width: w,
            height: h,
            offset,
            size: size_usize,
            source: LevelSource::Cursor(Arc::clone(cursor)),
        });

        offset = offset.checked_add(size).ok_or_else(overflow)?;
        width >>= 1;
        height >>= 1;
        level += 1;
    }

    Ok(mips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::MemoryCursor;
    use crate::dds::read_metadata;
    use crate::options::DecodeOptions;
    use crate::test_prelude::*;
    use dds_surface_formats::FourCC;
    use std::sync::Mutex;

    fn plan(data: Vec<u8>) -> DecodeResult<Vec<MipLevel<MemoryCursor<Vec<u8>>>>> {
        let mut cursor = MemoryCursor::new(data);
        let metadata = read_metadata(&mut cursor, DecodeOptions::default())?;
        let shared = Arc::new(Mutex::new(cursor));
        plan_mips(&metadata, metadata.format(), &shared)
    }

    #[rstest]
    #[case(DxgiFormat::BC1_UNORM, 0, LevelSize::Blocks(8))]
    #[case(DxgiFormat::BC7_UNORM_SRGB, 0, LevelSize::Blocks(16))]
    #[case(DxgiFormat::YUY2, 0, LevelSize::Texels(4))]
    #[case(DxgiFormat::NV12, 0, LevelSize::Texels(2))]
    #[case(DxgiFormat::R8G8B8A8_UNORM, 0, LevelSize::Texels(4))]
    #[case(DxgiFormat::R32G32B32_FLOAT, 0, LevelSize::Texels(12))]
    #[case(DxgiFormat::R8_UNORM, 16, LevelSize::Texels(1))]
    #[case(DxgiFormat::UNKNOWN, 24, LevelSize::Texels(3))]
    fn size_rules(#[case] format: DxgiFormat, #[case] bit_count: u32, #[case] expected: LevelSize) {
        assert_eq!(LevelSize::for_format(format, bit_count).unwrap(), expected);
    }

    #[rstest]
    #[case(DxgiFormat::UNKNOWN, 0)]
    #[case(DxgiFormat::UNKNOWN, 12)]
    #[case(DxgiFormat::R1_UNORM, 0)]
    #[case(DxgiFormat::SAMPLER_FEEDBACK_MIN_MIP_OPAQUE, 32)]
    fn unsupported_size_rules(#[case] format: DxgiFormat, #[case] bit_count: u32) {
        assert!(matches!(
            LevelSize::for_format(format, bit_count),
            Err(DecodeError::UnsupportedFormat(f)) if f == format
        ));
    }

    #[rstest]
    #[case(LevelSize::Blocks(8), 1, 1, 8)]
    #[case(LevelSize::Blocks(8), 5, 3, 16)]
    #[case(LevelSize::Blocks(16), 256, 256, 64 * 64 * 16)]
    #[case(LevelSize::Texels(4), 3, 2, 24)]
    fn level_bytes(#[case] rule: LevelSize, #[case] w: u32, #[case] h: u32, #[case] expected: u64) {
        assert_eq!(rule.level_bytes(w, h), Some(expected));
    }

    #[test]
    fn full_chain_of_256x256_bc1() {
        let data = DdsBuilder::new(256, 256)
            .four_cc(FourCC::DXT1)
            .mip_map_count(9)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_COMPLEX | DDSCAPS_MIPMAP)
            .payload_for(LevelSize::Blocks(8))
            .build();
        let len = data.len() as u64;
        let mips = plan(data).unwrap();

        assert_eq!(mips.len(), 9);
        let mut offset = DDS_HEADER_SIZE as u64;
        for (i, mip) in mips.iter().enumerate() {
            let (w, h) = ((256u32 >> i).max(1), (256u32 >> i).max(1));
            assert_eq!(mip.level(), i as u32);
            assert_eq!((mip.width(), mip.height()), (w, h));
            assert_eq!(mip.size() as u64, u64::from(w.div_ceil(4) * h.div_ceil(4) * 8));
            assert_eq!(mip.offset(), offset);
            offset += mip.size() as u64;
        }
        assert!(offset <= len);

        let last = &mips[8];
        assert_eq!((last.width(), last.height(), last.size()), (1, 1, 8));
    }

    #[test]
    fn non_square_dimensions_clamp_to_one() {
        let data = DdsBuilder::new(16, 2)
            .rgb(32, [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000])
            .mip_map_count(5)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .build();
        let mips = plan(data).unwrap();

        let dims: Vec<_> = mips.iter().map(|m| (m.width(), m.height(), m.size())).collect();
        assert_eq!(
            dims,
            vec![(16, 2, 128), (8, 1, 32), (4, 1, 16), (2, 1, 8), (1, 1, 4)]
        );
    }

    #[test]
    fn stops_once_both_dimensions_reach_zero() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::DXT5)
            .mip_map_count(10)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .build();
        assert_eq!(plan(data).unwrap().len(), 3);
    }

    #[test]
    fn no_mipmap_capability_plans_nothing() {
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC::DXT1)
            .mip_map_count(1)
            .caps(DDSCAPS_TEXTURE)
            .build();
        assert!(plan(data).unwrap().is_empty());
    }

    #[test]
    fn no_mips_skips_size_policy() {
        // An unsizeable format is fine as long as nothing has to be sized.
        let data = DdsBuilder::new(4, 4)
            .four_cc(FourCC(*b"ZZZZ"))
            .mip_map_count(1)
            .caps(DDSCAPS_TEXTURE)
            .build();
        assert!(plan(data).unwrap().is_empty());
    }

    #[test]
    fn huge_dimensions_overflow() {
        let data = DdsBuilder::new(u32::MAX, u32::MAX)
            .dx10(DxgiFormat::R32G32B32A32_FLOAT)
            .mip_map_count(1)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .build();
        assert!(matches!(
            plan(data),
            Err(DecodeError::LevelSizeOverflow { level: 0 })
        ));
    }

    #[test]
    fn reads_are_repeatable_and_independent() {
        let data = DdsBuilder::new(8, 8)
            .four_cc(FourCC::DXT1)
            .mip_map_count(4)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .payload_for(LevelSize::Blocks(8))
            .build();
        let mips = plan(data).unwrap();

        let second = mips[1].read().unwrap();
        let first = mips[0].read().unwrap();
        assert_eq!(mips[1].read().unwrap(), second);
        assert_eq!(first.len(), 32);
        assert_eq!(second.len(), 8);
        assert_ne!(first[..8], second[..]);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let data = DdsBuilder::new(8, 8)
            .four_cc(FourCC::DXT1)
            .mip_map_count(2)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .payload(vec![0u8; 32])
            .build();
        let mips = plan(data).unwrap();

        assert!(mips[0].read().is_ok());
        assert!(matches!(mips[1].read(), Err(DecodeError::Truncated { .. })));
        assert!(mips[0].read().is_ok());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_level_over_short_source_is_truncated() {
        let data = DdsBuilder::new(1 << 28, 1 << 28)
            .dx10(DxgiFormat::R32G32B32A32_FLOAT)
            .mip_map_count(1)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .build();
        let mips = plan(data).unwrap();

        let level = &mips[0];
        assert_eq!(level.size(), 1 << 60);
        assert!(matches!(
            level.read(),
            Err(DecodeError::Truncated { offset, requested })
                if offset == DDS_DX10_TOTAL_HEADER_SIZE as u64 && requested == 1 << 60
        ));

        let mut buf = vec![0u8; 16];
        assert!(matches!(
            level.read_into(&mut buf),
            Err(DecodeError::OutputBufferTooSmall { .. })
        ));
    }

    #[test]
    fn level_starting_past_the_end_is_truncated() {
        let data = DdsBuilder::new(8, 8)
            .four_cc(FourCC::DXT1)
            .mip_map_count(3)
            .caps(DDSCAPS_TEXTURE | DDSCAPS_MIPMAP)
            .payload(vec![0u8; 16])
            .build();
        let mips = plan(data).unwrap();

        assert!(matches!(mips[2].read(), Err(DecodeError::Truncated { .. })));
        let mut buf = [0u8; 8];
        assert!(matches!(
            mips[2].read_into(&mut buf),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn read_into_checks_buffer_length() {
        let level = MipLevel::<MemoryCursor<Vec<u8>>>::from_bytes(0, 2, 2, vec![1u8, 2, 3, 4]);

        let mut small = [0u8; 3];
        assert!(matches!(
            level.read_into(&mut small),
            Err(DecodeError::OutputBufferTooSmall {
                required: 4,
                actual: 3
            })
        ));

        let mut large = [0u8; 6];
        assert_eq!(level.read_into(&mut large).unwrap(), 4);
        assert_eq!(large, [1, 2, 3, 4, 0, 0]);
    }

    #[test]
    fn in_memory_level() {
        let level = MipLevel::<MemoryCursor<Vec<u8>>>::from_bytes(3, 1, 1, vec![7u8; 8]);
        assert_eq!((level.level(), level.offset(), level.size()), (3, 0, 8));
        assert_eq!(level.clone().read().unwrap(), vec![7u8; 8]);
    }
}
