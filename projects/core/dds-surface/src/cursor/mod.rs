//! Byte sources the decoder reads from.
//!
//! The decoder reads an exact number of bytes, seeks to an absolute offset, and asks
//! for the current offset and the total length of the source. [`MemoryCursor`] serves these from
//! a buffer, [`StreamCursor`] from anything implementing [`Read`] + [`Seek`].
//!
//! [`Read`]: std::io::Read
//! [`Seek`]: std::io::Seek

mod memory;
mod stream;

pub use memory::*;
pub use stream::*;

use crate::error::{DecodeError, DecodeResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sequential and random access to a source of bytes.
///
/// Offsets are absolute positions within the source.
pub trait ByteCursor {
    /// Fills `buf` completely, starting at the current position, and advances past it.
    ///
    /// Fails with [`DecodeError::Truncated`] if the source ends first.
    fn read_exact_into(&mut self, buf: &mut [u8]) -> DecodeResult<()>;

    /// Moves the current position to `offset`.
    fn seek(&mut self, offset: u64) -> DecodeResult<()>;

    /// Returns the current position.
    fn position(&self) -> u64;

    /// Total length of the source in bytes. Does not move the current position.
    fn source_len(&mut self) -> DecodeResult<u64>;

    /// Reads exactly `len` bytes into a new buffer.
    ///
    /// Nothing is allocated when the source holds fewer than `len` bytes past the
    /// current position; the read fails with [`DecodeError::Truncated`] instead.
    fn read(&mut self, len: usize) -> DecodeResult<Vec<u8>> {
        let offset = self.position();
        if offset.saturating_add(len as u64) > self.source_len()? {
            return Err(DecodeError::Truncated {
                offset,
                requested: len,
            });
        }

        let mut buf = vec![0u8; len];
        self.read_exact_into(&mut buf)?;
        Ok(buf)
    }
}

impl<C: ByteCursor + ?Sized> ByteCursor for &mut C {
    #[inline]
    fn read_exact_into(&mut self, buf: &mut [u8]) -> DecodeResult<()> {
        (**self).read_exact_into(buf)
    }

    #[inline]
    fn seek(&mut self, offset: u64) -> DecodeResult<()> {
        (**self).seek(offset)
    }

    #[inline]
    fn position(&self) -> u64 {
        (**self).position()
    }

    #[inline]
    fn source_len(&mut self) -> DecodeResult<u64> {
        (**self).source_len()
    }
}

impl<C: ByteCursor + ?Sized> ByteCursor for Box<C> {
    #[inline]
    fn read_exact_into(&mut self, buf: &mut [u8]) -> DecodeResult<()> {
        (**self).read_exact_into(buf)
    }

    #[inline]
    fn seek(&mut self, offset: u64) -> DecodeResult<()> {
        (**self).seek(offset)
    }

    #[inline]
    fn position(&self) -> u64 {
        (**self).position()
    }

    #[inline]
    fn source_len(&mut self) -> DecodeResult<u64> {
        (**self).source_len()
    }
}

/// A cursor shared between a [`Surface`] and all of its [`MipLevel`]s.
///
/// Every seek + read pair happens under the lock, so deferred reads issued from
/// different threads cannot interleave.
///
/// [`Surface`]: crate::Surface
/// [`MipLevel`]: crate::MipLevel
pub type SharedCursor<C> = Arc<Mutex<C>>;

/// Locks a shared cursor, ignoring poisoning. Every read seeks before it reads.
pub(crate) fn lock_cursor<C>(cursor: &SharedCursor<C>) -> MutexGuard<'_, C> {
    cursor.lock().unwrap_or_else(PoisonError::into_inner)
}
