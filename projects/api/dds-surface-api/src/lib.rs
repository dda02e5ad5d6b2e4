#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core modules
pub mod api;

#[cfg(feature = "file-io")]
#[cfg_attr(docsrs, doc(cfg(feature = "file-io")))]
pub mod file_io;

// Re-export key APIs
pub use api::*;

// Re-export the decoder so callers need a single dependency
pub use dds_surface;
pub use dds_surface::{
    DecodeError, DecodeOptions, DecodeResult, DxgiFormat, MagicCheck, MemoryCursor, MipLevel,
    StreamCursor, Surface,
};
