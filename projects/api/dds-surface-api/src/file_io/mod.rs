//! Memory mapped file access.
//!
//! Maps the whole file with `lightweight-mmap` and decodes straight from the mapping,
//! so level reads are plain memory copies.

mod error;
pub use error::*;

mod lightweight_mmap_impl;
pub use lightweight_mmap_impl::*;
