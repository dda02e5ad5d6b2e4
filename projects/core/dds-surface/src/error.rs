//! Error types for DDS decoding.

use core::fmt;
use dds_surface_formats::DxgiFormat;
use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a DDS file or reading one of its mip levels.
///
/// Everything returned by [`decode`] is fatal: no partially decoded surface is ever
/// produced. Errors from [`MipLevel::read`] only concern that single read.
///
/// [`decode`]: crate::decode
/// [`MipLevel::read`]: crate::MipLevel::read
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The first 4 bytes are not `"DDS "`.
    #[error("Not a DDS file: expected magic \"DDS \", found {found:02X?}")]
    BadMagic { found: [u8; 4] },

    /// The source ended before the requested number of bytes could be read.
    #[error("Unexpected end of data: needed {requested} bytes at offset {offset}")]
    Truncated {
        /// Position the read started at.
        offset: u64,
        /// Number of bytes requested.
        requested: usize,
    },

    /// A DX10 header field holds a value that is not part of its enumeration.
    #[error("Unknown value {value} for DX10 header field '{field}'")]
    UnknownEnumValue { field: ExtensionField, value: u32 },

    /// Level sizes cannot be computed for this format.
    #[error("Cannot compute mip level sizes for format {0:?}")]
    UnsupportedFormat(DxgiFormat),

    /// The size or offset of a mip level does not fit in 64 bits (or in memory).
    #[error("Size of mip level {level} overflows")]
    LevelSizeOverflow { level: u32 },

    /// Attempted to seek past the end of an in-memory source.
    #[error("Seek to offset {offset} is beyond the end of the data ({len} bytes)")]
    SeekOutOfBounds { offset: u64, len: u64 },

    /// Buffer passed to [`MipLevel::read_into`](crate::MipLevel::read_into) cannot hold the level.
    #[error("Output buffer too small: required {required} bytes, got {actual} bytes")]
    OutputBufferTooSmall { required: usize, actual: usize },

    /// Error reported by an underlying [`std::io`] stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The strictly decoded fields of the DX10 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionField {
    /// `dxgiFormat`
    Format,
    /// `resourceDimension`
    ResourceDimension,
    /// `miscFlag`
    MiscFlag,
    /// `miscFlags2`, of which the alpha mode is the only defined content.
    AlphaMode,
}

impl fmt::Display for ExtensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Format => "dxgiFormat",
            Self::ResourceDimension => "resourceDimension",
            Self::MiscFlag => "miscFlag",
            Self::AlphaMode => "miscFlags2",
        })
    }
}
