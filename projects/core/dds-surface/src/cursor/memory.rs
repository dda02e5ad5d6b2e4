use super::ByteCursor;
use crate::error::{DecodeError, DecodeResult};

/// A [`ByteCursor`] over an in-memory buffer.
///
/// Works with owned (`Vec<u8>`, `Box<[u8]>`) and borrowed (`&[u8]`) buffers alike.
#[derive(Debug, Clone)]
pub struct MemoryCursor<B> {
    data: B,
    position: u64,
}

impl<B: AsRef<[u8]>> MemoryCursor<B> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: B) -> Self {
        Self { data, position: 0 }
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> u64 {
        self.data.as_ref().len() as u64
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_empty()
    }

    /// Bytes left between the current position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position)
    }

    /// Returns the underlying buffer.
    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteCursor for MemoryCursor<B> {
    fn read_exact_into(&mut self, buf: &mut [u8]) -> DecodeResult<()> {
        if (buf.len() as u64) > self.remaining() {
            return Err(DecodeError::Truncated {
                offset: self.position,
                requested: buf.len(),
            });
        }

        // position <= len here, so it fits a usize.
        let start = self.position as usize;
        buf.copy_from_slice(&self.data.as_ref()[start..start + buf.len()]);
        self.position += buf.len() as u64;
        Ok(())
    }

    fn seek(&mut self, offset: u64) -> DecodeResult<()> {
        if offset > self.len() {
            return Err(DecodeError::SeekOutOfBounds {
                offset,
                len: self.len(),
            });
        }

        self.position = offset;
        Ok(())
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    fn source_len(&mut self) -> DecodeResult<u64> {
        Ok(self.len())
    }
}
