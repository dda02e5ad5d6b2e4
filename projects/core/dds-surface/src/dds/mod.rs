/// Layout constants shared between modules.
pub mod constants;

/// Bitmask header fields decoded as flag sets.
pub mod flags;

/// The primary header and its nested pixel format.
pub mod header;

/// The optional DX10 header.
pub mod extension;

/// Header plus extension, with the payload position.
pub mod metadata;

/// Determine if a buffer is a DDS file.
pub mod likely_dds;

pub use extension::*;
pub use flags::*;
pub use header::*;
pub use likely_dds::*;
pub use metadata::*;
