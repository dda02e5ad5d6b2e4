#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[cfg(test)]
pub mod test_prelude;

// Module declarations
pub mod cursor;
pub mod dds;
pub mod error;
pub mod mips;
pub mod options;
pub mod resolve;
pub mod surface;

// Re-export the decode pipeline at crate root
pub use cursor::{ByteCursor, MemoryCursor, SharedCursor, StreamCursor};
pub use dds::{
    likely_dds, AlphaMode, Capability, Capability2, ExtendedFormat, Flag, FlagSet, HeaderFlag,
    Metadata, PixelFormatDescriptor, PixelFormatFlag, PrimaryHeader, ResourceDimension,
    ResourceMiscFlag,
};
pub use error::{DecodeError, DecodeResult, ExtensionField};
pub use mips::{LevelSize, MipLevel};
pub use options::{DecodeOptions, MagicCheck};
pub use resolve::{resolve_format, resolve_legacy_format};
pub use surface::{decode, decode_with_options, Surface};

// Format catalog types appear throughout the public API
pub use dds_surface_formats::{DxgiFormat, FourCC};
