use super::FileOperationResult;
use dds_surface::{decode_with_options, DecodeOptions, MemoryCursor, Surface};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use tracing::debug;

/// A surface decoded from a memory mapped file.
pub type MappedSurface<'a> = Surface<MemoryCursor<&'a [u8]>>;

/// Memory-maps the file at `path`, decodes it and hands the surface to `f`.
///
/// The mapping lives until `f` returns; nothing borrowed from it can escape the closure.
///
/// # Example
///
/// ```no_run
/// use dds_surface_api::file_io::{with_mapped_file, FileOperationResult};
/// use std::path::Path;
///
/// fn base_level(path: &Path) -> FileOperationResult<Vec<u8>> {
///     with_mapped_file(path, |surface| match surface.get(0) {
///         Some(level) => level.read(),
///         None => Ok(Vec::new()),
///     })?
///     .map_err(Into::into)
/// }
/// ```
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl for<'a> FnOnce(MappedSurface<'a>) -> T,
) -> FileOperationResult<T> {
    with_mapped_file_and_options(path, DecodeOptions::default(), f)
}

/// [`with_mapped_file`] with explicit [`DecodeOptions`].
pub fn with_mapped_file_and_options<T>(
    path: &Path,
    options: DecodeOptions,
    f: impl for<'a> FnOnce(MappedSurface<'a>) -> T,
) -> FileOperationResult<T> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    debug!(path = %path.display(), size, "mapping DDS file");

    // Empty files cannot be mapped; let the decoder report them as truncated.
    if size == 0 {
        let surface = decode_with_options(MemoryCursor::new(&[][..]), options)?;
        return Ok(f(surface));
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    let surface = decode_with_options(MemoryCursor::new(mapping.as_slice()), options)?;
    Ok(f(surface))
}
