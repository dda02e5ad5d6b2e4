use super::constants::*;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, DecodeResult, ExtensionField};
use dds_surface_formats::DxgiFormat;
use derive_enum_all_values::AllValues;
use endian_writer::{EndianReader, LittleEndianReader};
use tracing::debug;

/// `D3D10_RESOURCE_DIMENSION`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum ResourceDimension {
    Unknown = 0,
    Buffer = 1,
    Texture1D = 2,
    Texture2D = 3,
    Texture3D = 4,
}

/// The DX10 header's `miscFlag`.
///
/// Stored as the position of a `D3D11_RESOURCE_MISC_FLAG` entry in declaration order,
/// starting at 0, rather than as the flag's bit value. Decoded as a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum ResourceMiscFlag {
    GenerateMips = 0,
    Shared = 1,
    TextureCube = 2,
    DrawIndirectArgs = 3,
    BufferAllowRawViews = 4,
    BufferStructured = 5,
    ResourceClamp = 6,
    SharedKeyedMutex = 7,
    GdiCompatible = 8,
    SharedNtHandle = 9,
    RestrictedContent = 10,
    RestrictSharedResource = 11,
    RestrictSharedResourceDriver = 12,
    Guarded = 13,
    TilePool = 14,
    Tiled = 15,
    HwProtected = 16,
    SharedDisplayable = 17,
    SharedExclusiveWriter = 18,
}

/// `DDS_ALPHA_MODE`, stored in the low bits of the DX10 header's `miscFlags2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum AlphaMode {
    Unknown = 0,
    Straight = 1,
    Premultiplied = 2,
    Opaque = 3,
    Custom = 4,
}

macro_rules! impl_from_raw {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                /// Looks up the variant with the given raw value.
                pub fn from_raw(value: u32) -> Option<Self> {
                    Self::all_values().iter().copied().find(|v| *v as u32 == value)
                }

                #[inline]
                pub const fn raw(self) -> u32 {
                    self as u32
                }
            }
        )+
    };
}

impl_from_raw!(ResourceDimension, ResourceMiscFlag, AlphaMode);

/// The 20 byte `DDS_HEADER_DXT10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtendedFormat {
    pub format: DxgiFormat,
    pub resource_dimension: ResourceDimension,
    pub misc_flag: ResourceMiscFlag,
    /// Number of elements in a texture array; number of cubes for a cube map array.
    pub array_size: u32,
    pub alpha_mode: AlphaMode,
}

/// Reads the DX10 header from the current position of `cursor`.
///
/// Only called when the primary header's FourCC is `DX10`.
///
/// # Errors
///
/// - [`DecodeError::Truncated`] if the source ends within the 20 bytes.
/// - [`DecodeError::UnknownEnumValue`] if a field holds a value outside its enumeration.
pub fn decode_extension<C: ByteCursor>(cursor: &mut C) -> DecodeResult<ExtendedFormat> {
    let mut data = [0u8; DX10_HEADER_SIZE];
    cursor.read_exact_into(&mut data)?;

    // SAFETY: `data` is DX10_HEADER_SIZE (20) bytes, the last field starts at 0x10.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (format, dimension, misc_flag, array_size, alpha_mode) = unsafe {
        (
            reader.read_u32_at(DX10_FORMAT_OFFSET as isize),
            reader.read_u32_at(DX10_RESOURCE_DIMENSION_OFFSET as isize),
            reader.read_u32_at(DX10_MISC_FLAG_OFFSET as isize),
            reader.read_u32_at(DX10_ARRAY_SIZE_OFFSET as isize),
            reader.read_u32_at(DX10_MISC_FLAGS2_OFFSET as isize),
        )
    };

    let extension = ExtendedFormat {
        format: strict(ExtensionField::Format, format, DxgiFormat::from_raw)?,
        resource_dimension: strict(
            ExtensionField::ResourceDimension,
            dimension,
            ResourceDimension::from_raw,
        )?,
        misc_flag: strict(ExtensionField::MiscFlag, misc_flag, ResourceMiscFlag::from_raw)?,
        array_size,
        alpha_mode: strict(ExtensionField::AlphaMode, alpha_mode, AlphaMode::from_raw)?,
    };

    debug!(
        format = ?extension.format,
        resource_dimension = ?extension.resource_dimension,
        array_size,
        "decoded DX10 header"
    );
    Ok(extension)
}

fn strict<T>(
    field: ExtensionField,
    value: u32,
    from_raw: impl FnOnce(u32) -> Option<T>,
) -> DecodeResult<T> {
    from_raw(value).ok_or(DecodeError::UnknownEnumValue { field, value })
}
