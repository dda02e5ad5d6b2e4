//! Error types for file I/O operations.

use dds_surface::DecodeError;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors that can occur during file operations.
///
/// File operations can fail either while accessing the file (not found, permission
/// denied, mapping failure) or while decoding its contents.
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// I/O operation failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),

    /// The file is not a valid DDS file
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Low-level errors from the `lightweight-mmap` backend.
#[derive(Debug, Error)]
pub enum LightweightMmapError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

/// File I/O errors raised while opening or mapping a file.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error from lightweight-mmap backend
    #[error("lightweight-mmap error: {0}")]
    LightweightMmap(#[from] LightweightMmapError),
}

// Direct From implementations for specific error types used with ? operator in file operations
impl From<lightweight_mmap::handles::HandleOpenError> for FileOperationError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::LightweightMmap(
            LightweightMmapError::FileHandle(e),
        ))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for FileOperationError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::LightweightMmap(
            LightweightMmapError::MemoryMapping(e),
        ))
    }
}
