//! Open a [`Surface`] from a byte buffer, an open handle or a path.

use dds_surface::{
    decode_with_options, DecodeOptions, DecodeResult, MemoryCursor, StreamCursor, Surface,
};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;

/// A surface decoded from a file opened by [`open_path`].
pub type FileSurface = Surface<StreamCursor<BufReader<File>>>;

/// Decodes a DDS file held in memory.
///
/// `bytes` can be owned (`Vec<u8>`) or borrowed (`&[u8]`); the surface keeps it for
/// deferred level reads.
///
/// # Example
///
/// ```
/// use dds_surface_api::{open_bytes, DecodeError};
///
/// let result = open_bytes(b"not a dds file".as_slice());
/// assert!(matches!(result, Err(DecodeError::BadMagic { .. })));
/// ```
pub fn open_bytes<B: AsRef<[u8]>>(bytes: B) -> DecodeResult<Surface<MemoryCursor<B>>> {
    open_bytes_with_options(bytes, DecodeOptions::default())
}

/// [`open_bytes`] with explicit [`DecodeOptions`].
pub fn open_bytes_with_options<B: AsRef<[u8]>>(
    bytes: B,
    options: DecodeOptions,
) -> DecodeResult<Surface<MemoryCursor<B>>> {
    decode_with_options(MemoryCursor::new(bytes), options)
}

/// Decodes a DDS file from an open handle, starting at its current position.
///
/// The handle stays open for as long as the surface or any of its levels is alive.
pub fn open_handle<R: Read + Seek>(handle: R) -> DecodeResult<Surface<StreamCursor<R>>> {
    open_handle_with_options(handle, DecodeOptions::default())
}

/// [`open_handle`] with explicit [`DecodeOptions`].
pub fn open_handle_with_options<R: Read + Seek>(
    handle: R,
    options: DecodeOptions,
) -> DecodeResult<Surface<StreamCursor<R>>> {
    decode_with_options(StreamCursor::new(handle)?, options)
}

/// Opens and decodes the DDS file at `path`.
///
/// The file is read through a [`BufReader`] and kept open for deferred level reads.
///
/// # Errors
///
/// [`DecodeError::Io`](dds_surface::DecodeError::Io) if the file cannot be opened, or any
/// decode error.
pub fn open_path(path: impl AsRef<Path>) -> DecodeResult<FileSurface> {
    open_path_with_options(path, DecodeOptions::default())
}

/// [`open_path`] with explicit [`DecodeOptions`].
pub fn open_path_with_options(
    path: impl AsRef<Path>,
    options: DecodeOptions,
) -> DecodeResult<FileSurface> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening DDS file");
    let file = File::open(path)?;
    open_handle_with_options(BufReader::new(file), options)
}
