//! `DXGI_FORMAT` identifiers and their physical properties.
//!
//! The values match the `DXGI_FORMAT` enumeration of `dxgiformat.h`, which is also
//! what the `dxgiFormat` field of a DDS DX10 header stores.
#![allow(non_camel_case_types)]

use derive_enum_all_values::AllValues;

/// Declares [`DxgiFormat`] together with its raw-code lookup and bits-per-pixel table,
/// so the three cannot drift apart.
macro_rules! dxgi_formats {
    ($($(#[$meta:meta])* $name:ident = $value:literal, $bpp:literal;)*) => {
        /// Canonical identifier of a surface's pixel or compression format.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
        #[repr(u32)]
        pub enum DxgiFormat {
            $($(#[$meta])* $name = $value,)*
        }

        impl DxgiFormat {
            /// Looks up the format with the given raw `DXGI_FORMAT` code.
            ///
            /// Returns [`None`] for codes that do not name a format.
            pub const fn from_raw(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Number of bits a single pixel occupies.
            ///
            /// For block-compressed formats this is the amortized cost of a pixel within
            /// its 4x4 block; for planar video formats it is the average over all planes.
            /// Opaque formats report 0.
            pub const fn bits_per_pixel(self) -> u32 {
                match self {
                    $(Self::$name => $bpp,)*
                }
            }
        }
    };
}

dxgi_formats! {
    /// Format is not known; also the result of failed legacy format inference.
    UNKNOWN = 0, 0;
    R32G32B32A32_TYPELESS = 1, 128;
    R32G32B32A32_FLOAT = 2, 128;
    R32G32B32A32_UINT = 3, 128;
    R32G32B32A32_SINT = 4, 128;
    R32G32B32_TYPELESS = 5, 96;
    R32G32B32_FLOAT = 6, 96;
    R32G32B32_UINT = 7, 96;
    R32G32B32_SINT = 8, 96;
    R16G16B16A16_TYPELESS = 9, 64;
    R16G16B16A16_FLOAT = 10, 64;
    R16G16B16A16_UNORM = 11, 64;
    R16G16B16A16_UINT = 12, 64;
    R16G16B16A16_SNORM = 13, 64;
    R16G16B16A16_SINT = 14, 64;
    R32G32_TYPELESS = 15, 64;
    R32G32_FLOAT = 16, 64;
    R32G32_UINT = 17, 64;
    R32G32_SINT = 18, 64;
    R32G8X24_TYPELESS = 19, 64;
    D32_FLOAT_S8X24_UINT = 20, 64;
    R32_FLOAT_X8X24_TYPELESS = 21, 64;
    X32_TYPELESS_G8X24_UINT = 22, 64;
    R10G10B10A2_TYPELESS = 23, 32;
    R10G10B10A2_UNORM = 24, 32;
    R10G10B10A2_UINT = 25, 32;
    R11G11B10_FLOAT = 26, 32;
    R8G8B8A8_TYPELESS = 27, 32;
    R8G8B8A8_UNORM = 28, 32;
    R8G8B8A8_UNORM_SRGB = 29, 32;
    R8G8B8A8_UINT = 30, 32;
    R8G8B8A8_SNORM = 31, 32;
    R8G8B8A8_SINT = 32, 32;
    R16G16_TYPELESS = 33, 32;
    R16G16_FLOAT = 34, 32;
    R16G16_UNORM = 35, 32;
    R16G16_UINT = 36, 32;
    R16G16_SNORM = 37, 32;
    R16G16_SINT = 38, 32;
    R32_TYPELESS = 39, 32;
    D32_FLOAT = 40, 32;
    R32_FLOAT = 41, 32;
    R32_UINT = 42, 32;
    R32_SINT = 43, 32;
    R24G8_TYPELESS = 44, 32;
    D24_UNORM_S8_UINT = 45, 32;
    R24_UNORM_X8_TYPELESS = 46, 32;
    X24_TYPELESS_G8_UINT = 47, 32;
    R8G8_TYPELESS = 48, 16;
    R8G8_UNORM = 49, 16;
    R8G8_UINT = 50, 16;
    R8G8_SNORM = 51, 16;
    R8G8_SINT = 52, 16;
    R16_TYPELESS = 53, 16;
    R16_FLOAT = 54, 16;
    D16_UNORM = 55, 16;
    R16_UNORM = 56, 16;
    R16_UINT = 57, 16;
    R16_SNORM = 58, 16;
    R16_SINT = 59, 16;
    R8_TYPELESS = 60, 8;
    R8_UNORM = 61, 8;
    R8_UINT = 62, 8;
    R8_SNORM = 63, 8;
    R8_SINT = 64, 8;
    A8_UNORM = 65, 8;
    R1_UNORM = 66, 1;
    R9G9B9E5_SHAREDEXP = 67, 32;
    R8G8_B8G8_UNORM = 68, 32;
    G8R8_G8B8_UNORM = 69, 32;
    /// a.k.a. DXT1
    BC1_TYPELESS = 70, 4;
    /// a.k.a. DXT1
    BC1_UNORM = 71, 4;
    /// a.k.a. DXT1
    BC1_UNORM_SRGB = 72, 4;
    /// a.k.a. DXT2/3
    BC2_TYPELESS = 73, 8;
    /// a.k.a. DXT2/3
    BC2_UNORM = 74, 8;
    /// a.k.a. DXT2/3
    BC2_UNORM_SRGB = 75, 8;
    /// a.k.a. DXT4/5
    BC3_TYPELESS = 76, 8;
    /// a.k.a. DXT4/5
    BC3_UNORM = 77, 8;
    /// a.k.a. DXT4/5
    BC3_UNORM_SRGB = 78, 8;
    BC4_TYPELESS = 79, 4;
    BC4_UNORM = 80, 4;
    BC4_SNORM = 81, 4;
    BC5_TYPELESS = 82, 8;
    BC5_UNORM = 83, 8;
    BC5_SNORM = 84, 8;
    B5G6R5_UNORM = 85, 16;
    B5G5R5A1_UNORM = 86, 16;
    B8G8R8A8_UNORM = 87, 32;
    B8G8R8X8_UNORM = 88, 32;
    R10G10B10_XR_BIAS_A2_UNORM = 89, 32;
    B8G8R8A8_TYPELESS = 90, 32;
    B8G8R8A8_UNORM_SRGB = 91, 32;
    B8G8R8X8_TYPELESS = 92, 32;
    B8G8R8X8_UNORM_SRGB = 93, 32;
    BC6H_TYPELESS = 94, 8;
    BC6H_UF16 = 95, 8;
    BC6H_SF16 = 96, 8;
    BC7_TYPELESS = 97, 8;
    BC7_UNORM = 98, 8;
    BC7_UNORM_SRGB = 99, 8;
    AYUV = 100, 32;
    Y410 = 101, 32;
    Y416 = 102, 64;
    NV12 = 103, 12;
    P010 = 104, 24;
    P016 = 105, 24;
    OPAQUE_420 = 106, 12;
    YUY2 = 107, 32;
    Y210 = 108, 64;
    Y216 = 109, 64;
    NV11 = 110, 12;
    AI44 = 111, 8;
    IA44 = 112, 8;
    P8 = 113, 8;
    A8P8 = 114, 16;
    B4G4R4A4_UNORM = 115, 16;
    P208 = 130, 16;
    V208 = 131, 16;
    V408 = 132, 24;
    SAMPLER_FEEDBACK_MIN_MIP_OPAQUE = 189, 0;
    SAMPLER_FEEDBACK_MIP_REGION_USED_OPAQUE = 190, 0;
}

impl DxgiFormat {
    /// Returns the raw `DXGI_FORMAT` code of this format.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Whether the data is stored as fixed-size blocks, each covering 4x4 pixels.
    pub const fn is_compressed_block(self) -> bool {
        matches!(
            self,
            Self::BC1_TYPELESS
                | Self::BC1_UNORM
                | Self::BC1_UNORM_SRGB
                | Self::BC2_TYPELESS
                | Self::BC2_UNORM
                | Self::BC2_UNORM_SRGB
                | Self::BC3_TYPELESS
                | Self::BC3_UNORM
                | Self::BC3_UNORM_SRGB
                | Self::BC4_TYPELESS
                | Self::BC4_UNORM
                | Self::BC4_SNORM
                | Self::BC5_TYPELESS
                | Self::BC5_UNORM
                | Self::BC5_SNORM
                | Self::BC6H_TYPELESS
                | Self::BC6H_UF16
                | Self::BC6H_SF16
                | Self::BC7_TYPELESS
                | Self::BC7_UNORM
                | Self::BC7_UNORM_SRGB
        )
    }

    /// Size of a single block, in bytes.
    ///
    /// Defined for the block-compressed formats (size of one 4x4 block) and for the
    /// packed/planar video formats (size of the per-pixel storage unit used to size a
    /// level). Returns [`None`] for every other format.
    pub const fn bytes_per_block(self) -> Option<u32> {
        match self {
            Self::NV12 | Self::OPAQUE_420 | Self::P208 => Some(2),

            Self::P010
            | Self::P016
            | Self::R8G8_B8G8_UNORM
            | Self::G8R8_G8B8_UNORM
            | Self::YUY2 => Some(4),

            Self::Y210
            | Self::Y216
            | Self::BC1_TYPELESS
            | Self::BC1_UNORM
            | Self::BC1_UNORM_SRGB
            | Self::BC4_TYPELESS
            | Self::BC4_UNORM
            | Self::BC4_SNORM => Some(8),

            Self::BC2_TYPELESS
            | Self::BC2_UNORM
            | Self::BC2_UNORM_SRGB
            | Self::BC3_TYPELESS
            | Self::BC3_UNORM
            | Self::BC3_UNORM_SRGB
            | Self::BC5_TYPELESS
            | Self::BC5_UNORM
            | Self::BC5_SNORM
            | Self::BC6H_TYPELESS
            | Self::BC6H_UF16
            | Self::BC6H_SF16
            | Self::BC7_TYPELESS
            | Self::BC7_UNORM
            | Self::BC7_UNORM_SRGB => Some(16),

            _ => None,
        }
    }

    /// Whether the format is a depth or depth/stencil format.
    pub const fn is_depth_stencil(self) -> bool {
        matches!(
            self,
            Self::R32G8X24_TYPELESS
                | Self::D32_FLOAT_S8X24_UINT
                | Self::R32_FLOAT_X8X24_TYPELESS
                | Self::X32_TYPELESS_G8X24_UINT
                | Self::D32_FLOAT
                | Self::R24G8_TYPELESS
                | Self::D24_UNORM_S8_UINT
                | Self::R24_UNORM_X8_TYPELESS
                | Self::X24_TYPELESS_G8_UINT
                | Self::D16_UNORM
        )
    }

    /// Whether this is the [`DxgiFormat::UNKNOWN`] placeholder.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::UNKNOWN)
    }
}

impl TryFrom<u32> for DxgiFormat {
    type Error = u32;

    /// Strict conversion; the unrecognized raw value is handed back on failure.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(value)
    }
}

impl From<DxgiFormat> for u32 {
    fn from(format: DxgiFormat) -> Self {
        format.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn from_raw_round_trips_every_format() {
        for &format in DxgiFormat::all_values() {
            assert_eq!(DxgiFormat::from_raw(format.raw()), Some(format));
        }
    }

    #[rstest]
    #[case(116)]
    #[case(129)]
    #[case(133)]
    #[case(188)]
    #[case(191)]
    #[case(u32::MAX)]
    fn from_raw_rejects_gaps_and_out_of_range_codes(#[case] raw: u32) {
        assert_eq!(DxgiFormat::from_raw(raw), None);
        assert_eq!(DxgiFormat::try_from(raw), Err(raw));
    }

    #[rstest]
    #[case(70, DxgiFormat::BC1_TYPELESS)]
    #[case(71, DxgiFormat::BC1_UNORM)]
    #[case(77, DxgiFormat::BC3_UNORM)]
    #[case(87, DxgiFormat::B8G8R8A8_UNORM)]
    #[case(88, DxgiFormat::B8G8R8X8_UNORM)]
    #[case(95, DxgiFormat::BC6H_UF16)]
    #[case(98, DxgiFormat::BC7_UNORM)]
    #[case(107, DxgiFormat::YUY2)]
    #[case(115, DxgiFormat::B4G4R4A4_UNORM)]
    fn raw_codes_follow_dxgiformat_h(#[case] raw: u32, #[case] expected: DxgiFormat) {
        assert_eq!(DxgiFormat::from_raw(raw), Some(expected));
    }

    #[test]
    fn every_compressed_block_format_has_a_block_size() {
        for &format in DxgiFormat::all_values() {
            if format.is_compressed_block() {
                let block = format.bytes_per_block().unwrap();
                assert!(block == 8 || block == 16, "{format:?} has block size {block}");
                // 16 pixels per block.
                assert_eq!(format.bits_per_pixel() * 16, block * 8, "{format:?}");
            }
        }
    }

    #[rstest]
    #[case(DxgiFormat::BC1_UNORM, Some(8))]
    #[case(DxgiFormat::BC4_SNORM, Some(8))]
    #[case(DxgiFormat::BC2_UNORM, Some(16))]
    #[case(DxgiFormat::BC7_UNORM_SRGB, Some(16))]
    #[case(DxgiFormat::NV12, Some(2))]
    #[case(DxgiFormat::YUY2, Some(4))]
    #[case(DxgiFormat::Y216, Some(8))]
    #[case(DxgiFormat::R8G8B8A8_UNORM, None)]
    #[case(DxgiFormat::UNKNOWN, None)]
    fn bytes_per_block_is_a_closed_set(#[case] format: DxgiFormat, #[case] expected: Option<u32>) {
        assert_eq!(format.bytes_per_block(), expected);
    }

    #[test]
    fn depth_formats_are_not_compressed() {
        for &format in DxgiFormat::all_values() {
            if format.is_depth_stencil() {
                assert!(!format.is_compressed_block());
            }
        }
    }
}
