//! Determines the real pixel format of a DDS payload.
//!
//! Files with a DX10 header state their [`DxgiFormat`] outright. Older files only carry
//! a `DDS_PIXELFORMAT`: a set of flags, a bit count and per-channel bit masks (or a
//! FourCC). Those are matched against the layouts historical encoders (D3DX, NVTT and
//! friends) actually wrote.

use crate::dds::{ExtendedFormat, PixelFormatDescriptor, PixelFormatFlag};
use dds_surface_formats::{DxgiFormat, FourCC};
use tracing::debug;

/// Channel masks a legacy layout must have.
///
/// `None` means the channel is not looked at. A `Some` mask must match exactly,
/// including `Some(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Masks {
    red: Option<u32>,
    green: Option<u32>,
    blue: Option<u32>,
    alpha: Option<u32>,
}

impl Masks {
    const fn rgba(red: u32, green: u32, blue: u32, alpha: u32) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: Some(alpha),
        }
    }

    const fn rgb(red: u32, green: u32, blue: u32) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: None,
        }
    }

    const fn rg(red: u32, green: u32) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: None,
            alpha: None,
        }
    }

    const fn r(red: u32) -> Self {
        Self {
            red: Some(red),
            green: None,
            blue: None,
            alpha: None,
        }
    }

    const fn ra(red: u32, alpha: u32) -> Self {
        Self {
            red: Some(red),
            green: None,
            blue: None,
            alpha: Some(alpha),
        }
    }

    fn matches(&self, pf: &PixelFormatDescriptor) -> bool {
        fn channel(expected: Option<u32>, actual: u32) -> bool {
            match expected {
                Some(mask) => mask == actual,
                None => true,
            }
        }

        channel(self.red, pf.red_mask)
            && channel(self.green, pf.green_mask)
            && channel(self.blue, pf.blue_mask)
            && channel(self.alpha, pf.alpha_mask)
    }
}

type MaskTable = &'static [(Masks, DxgiFormat)];

const RGB_32: MaskTable = &[
    (Masks::rgba(0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000), DxgiFormat::R8G8B8A8_UNORM),
    (Masks::rgba(0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000), DxgiFormat::B8G8R8A8_UNORM),
    (Masks::rgba(0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0), DxgiFormat::B8G8R8X8_UNORM),
    // D3DX writes 10:10:10:2 with red and blue swapped. Only that form is recognized;
    // the correctly ordered mask has no DXGI equivalent here.
    (Masks::rgba(0x3FF0_0000, 0x000F_FC00, 0x0000_03FF, 0xC000_0000), DxgiFormat::R10G10B10A2_UNORM),
    (Masks::rg(0x0000_FFFF, 0xFFFF_0000), DxgiFormat::R16G16_UNORM),
    // D3D9's only 32-bit single channel format was R32F.
    (Masks::r(0xFFFF_FFFF), DxgiFormat::R32_FLOAT),
];

const RGB_16: MaskTable = &[
    (Masks::rgba(0x7C00, 0x03E0, 0x001F, 0x8000), DxgiFormat::B5G5R5A1_UNORM),
    (Masks::rgb(0xF800, 0x07E0, 0x001F), DxgiFormat::B5G6R5_UNORM),
    (Masks::rgba(0x0F00, 0x00F0, 0x000F, 0xF000), DxgiFormat::B4G4R4A4_UNORM),
    // NVTT 1.x wrote these as RGB instead of LUMINANCE.
    (Masks::ra(0x00FF, 0xFF00), DxgiFormat::R8G8_UNORM),
    (Masks::r(0xFFFF), DxgiFormat::R16_UNORM),
];

const RGB_8: MaskTable = &[
    // NVTT 1.x
    (Masks::r(0xFF), DxgiFormat::R8_UNORM),
];

const LUMINANCE_16: MaskTable = &[
    (Masks::r(0xFFFF), DxgiFormat::R16_UNORM),
    (Masks::ra(0x00FF, 0xFF00), DxgiFormat::R8G8_UNORM),
];

const LUMINANCE_8: MaskTable = &[
    (Masks::r(0xFF), DxgiFormat::R8_UNORM),
    // Some writers declare a bit count of 8 for 8:8 luminance + alpha.
    (Masks::ra(0x00FF, 0xFF00), DxgiFormat::R8G8_UNORM),
];

const BUMP_DU_DV_32: MaskTable = &[
    (Masks::rgba(0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000), DxgiFormat::R8G8B8A8_SNORM),
    (Masks::rg(0x0000_FFFF, 0xFFFF_0000), DxgiFormat::R16G16_SNORM),
];

const BUMP_DU_DV_16: MaskTable = &[(Masks::rg(0x00FF, 0xFF00), DxgiFormat::R8G8_SNORM)];

fn first_match(table: MaskTable, pf: &PixelFormatDescriptor) -> Option<DxgiFormat> {
    table
        .iter()
        .find(|(masks, _)| masks.matches(pf))
        .map(|&(_, format)| format)
}

fn four_cc_format(four_cc: FourCC) -> Option<DxgiFormat> {
    // BC6H and BC7 are only ever written with a DX10 header.
    Some(match four_cc {
        FourCC::DXT1 => DxgiFormat::BC1_UNORM,
        FourCC::DXT2 | FourCC::DXT3 => DxgiFormat::BC2_UNORM,
        FourCC::DXT4 | FourCC::DXT5 => DxgiFormat::BC3_UNORM,
        FourCC::ATI1 | FourCC::BC4U => DxgiFormat::BC4_UNORM,
        FourCC::BC4S => DxgiFormat::BC4_SNORM,
        FourCC::ATI2 | FourCC::BC5U => DxgiFormat::BC5_UNORM,
        FourCC::BC5S => DxgiFormat::BC5_SNORM,
        FourCC::RGBG => DxgiFormat::R8G8_B8G8_UNORM,
        FourCC::GRGB => DxgiFormat::G8R8_G8B8_UNORM,
        FourCC::YUY2 => DxgiFormat::YUY2,
        _ => return None,
    })
}

/// Returns the format of the payload.
///
/// The DX10 header's format wins when present. Otherwise the legacy pixel format is
/// inferred with [`resolve_legacy_format`].
pub fn resolve_format(
    pixel_format: &PixelFormatDescriptor,
    extension: Option<&ExtendedFormat>,
) -> DxgiFormat {
    match extension {
        Some(extension) => extension.format,
        None => resolve_legacy_format(pixel_format),
    }
}

/// Infers the format of a file without a DX10 header.
///
/// The first flag out of RGB, LUMINANCE, ALPHA, BUMP_DU_DV and FOURCC present in the
/// pixel format picks the branch; within it the bit count and masks must match a
/// known layout. Layouts that match nothing yield [`DxgiFormat::UNKNOWN`], never an error,
/// and never fall through to a later branch.
pub fn resolve_legacy_format(pf: &PixelFormatDescriptor) -> DxgiFormat {
    let resolved = if pf.has_flag(PixelFormatFlag::Rgb) {
        match pf.bit_count {
            32 => first_match(RGB_32, pf),
            16 => first_match(RGB_16, pf),
            8 => first_match(RGB_8, pf),
            // No 24bpp DXGI formats.
            _ => None,
        }
    } else if pf.has_flag(PixelFormatFlag::Luminance) {
        match pf.bit_count {
            16 => first_match(LUMINANCE_16, pf),
            8 => first_match(LUMINANCE_8, pf),
            _ => None,
        }
    } else if pf.has_flag(PixelFormatFlag::Alpha) {
        match pf.bit_count {
            8 => Some(DxgiFormat::A8_UNORM),
            _ => None,
        }
    } else if pf.has_flag(PixelFormatFlag::BumpDuDv) {
        match pf.bit_count {
            32 => first_match(BUMP_DU_DV_32, pf),
            16 => first_match(BUMP_DU_DV_16, pf),
            _ => None,
        }
    } else if pf.has_flag(PixelFormatFlag::FourCC) {
        four_cc_format(pf.four_cc)
    } else {
        None
    };

    match resolved {
        Some(format) => format,
        None => {
            debug!(
                flags = ?pf.flags,
                bit_count = pf.bit_count,
                four_cc = %pf.four_cc,
                "legacy pixel format matches no known layout, using UNKNOWN"
            );
            DxgiFormat::UNKNOWN
        }
    }
}
