//! Byte sources feeding the decoder.
//!
//! A source has a single operation: fill a caller-provided buffer and report
//! how many bytes were written. Zero means the stream is exhausted. There is
//! no seeking and no peeking; the decoder never asks for a byte twice.

use core::convert::Infallible;

/// Supplies raw bytes on demand.
pub trait ByteSource {
    /// Error raised when the underlying stream fails.
    type Error;

    /// Writes up to `buf.len()` bytes into `buf` and returns how many were
    /// written. `Ok(0)` signals the end of the stream.
    ///
    /// # Errors
    ///
    /// Returns the source's own error when reading fails.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).fill(buf)
    }
}

/// An in-memory byte slice, consumed from the front.
impl ByteSource for &[u8] {
    type Error = Infallible;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// A source that hands out an iterator of byte chunks, at most one chunk per
/// refill.
///
/// Chunk boundaries may fall anywhere, including inside a multi-byte UTF-8
/// sequence. A chunk larger than the decoder's buffer is handed out over
/// several refills. Empty chunks are skipped rather than read as the end of
/// the stream.
#[derive(Debug, Clone)]
pub struct ChunkSource<I: Iterator> {
    chunks: I,
    current: Option<I::Item>,
    offset: usize,
}

impl<I> ChunkSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    /// Creates a source over `chunks`.
    pub fn new<C>(chunks: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            chunks: chunks.into_iter(),
            current: None,
            offset: 0,
        }
    }
}

impl<I> ByteSource for ChunkSource<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    type Error = Infallible;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            if let Some(chunk) = &self.current {
                let rest = &chunk.as_ref()[self.offset..];
                if !rest.is_empty() {
                    let n = buf.len().min(rest.len());
                    buf[..n].copy_from_slice(&rest[..n]);
                    self.offset += n;
                    return Ok(n);
                }
            }
            match self.chunks.next() {
                Some(chunk) => {
                    self.current = Some(chunk);
                    self.offset = 0;
                }
                None => {
                    self.current = None;
                    return Ok(0);
                }
            }
        }
    }
}

/// Adapts any [`std::io::Read`] into a [`ByteSource`].
///
/// Interrupted reads are retried; any other I/O error is passed through.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    reader: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.reader.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                res => return res,
            }
        }
    }
}
