use super::ByteCursor;
use crate::error::{DecodeError, DecodeResult};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// A [`ByteCursor`] over an open stream, such as a [`File`](std::fs::File).
///
/// Offsets are absolute within the stream. Decoding starts wherever the stream is
/// positioned when the cursor is created.
#[derive(Debug)]
pub struct StreamCursor<R> {
    inner: R,
    position: u64,
}

impl<R: Read + Seek> StreamCursor<R> {
    /// Wraps `inner`, picking up its current position.
    pub fn new(mut inner: R) -> DecodeResult<Self> {
        let position = inner.stream_position()?;
        Ok(Self { inner, position })
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteCursor for StreamCursor<R> {
    fn read_exact_into(&mut self, buf: &mut [u8]) -> DecodeResult<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) => {
                // A failed read_exact leaves the stream position unspecified.
                self.inner.seek(SeekFrom::Start(self.position))?;
                if e.kind() == ErrorKind::UnexpectedEof {
                    Err(DecodeError::Truncated {
                        offset: self.position,
                        requested: buf.len(),
                    })
                } else {
                    Err(e.into())
                }
            }
        }
    }

    fn seek(&mut self, offset: u64) -> DecodeResult<()> {
        self.position = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    fn source_len(&mut self) -> DecodeResult<u64> {
        let len = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(self.position))?;
        Ok(len)
    }
}
