use std::cmp;
use std::fmt;
use std::io::{self, BufRead, Read};

use anyhow::anyhow;
use io_error::{IoUtilError, Result};

use crate::source::Source;

const KILOBYTE: usize = 1024;
pub const DEFAULT_BUFFER_SIZE: usize = 64 * KILOBYTE;

/// Outcome of a single [`BufferingReader::read_chunk`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// This many bytes were copied into the destination.
    Read(usize),
    /// The source is exhausted and the buffer drained.
    EndOfStream,
}

impl ReadStatus {
    /// Bytes copied by the call, `0` at end of stream.
    pub fn bytes(self) -> usize {
        match self {
            ReadStatus::Read(n) => n,
            ReadStatus::EndOfStream => 0,
        }
    }

    pub fn is_end_of_stream(self) -> bool {
        self == ReadStatus::EndOfStream
    }
}

/// Buffered reader over an exclusively owned [`Source`].
///
/// Bytes in `buf[pos..filled]` are buffered and not yet handed out.
/// Everything outside that window is stale. Once `eof` is set and the
/// window is empty the source is never read again. A refill failure that
/// happened after bytes were already handed out is kept in `pending` and
/// returned by the next read.
///
/// The reader takes `&mut self` everywhere and does no locking; share it
/// between threads only behind external synchronization.
pub struct BufferingReader<S: Source> {
    source: Option<S>,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
    eof: bool,
    pending: Option<IoUtilError>,
}

impl<S: Source> BufferingReader<S> {
    /// Wraps `source` with an internal buffer of `buffer_size` bytes.
    ///
    /// Fails with [`IoUtilError::InvalidArgument`] when `buffer_size` is 0.
    pub fn new(source: S, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(IoUtilError::invalid_argument(
                "buffer size must be positive",
            ));
        }

        Ok(Self::with_buffer(source, buffer_size))
    }

    /// Wraps `source` with a [`DEFAULT_BUFFER_SIZE`] buffer.
    pub fn with_default_capacity(source: S) -> Self {
        Self::with_buffer(source, DEFAULT_BUFFER_SIZE)
    }

    fn with_buffer(source: S, buffer_size: usize) -> Self {
        log::debug!("Creating buffering reader with {} byte buffer", buffer_size);

        BufferingReader {
            source: Some(source),
            buf: vec![0; buffer_size].into_boxed_slice(),
            pos: 0,
            filled: 0,
            eof: false,
            pending: None,
        }
    }

    /// Copies up to `max_bytes` bytes into the front of `dest`.
    ///
    /// When the buffer holds at least `max_bytes` bytes the request is
    /// served from it and the source is not touched. Otherwise the buffered
    /// bytes are handed out and the buffer is refilled with a single read on
    /// the source to top the request up. Whatever that one read delivered is
    /// all this call can return, so a short count does not mean the stream
    /// is over: only [`ReadStatus::EndOfStream`] does.
    ///
    /// A `max_bytes` of 0 returns `Read(0)` with no side effect. A
    /// `max_bytes` larger than `dest` is rejected with
    /// [`IoUtilError::InvalidArgument`]. A failed source read is returned
    /// as [`IoUtilError::Io`] and leaves the reader as it was before the
    /// call. If bytes were already copied when the refill failed, those
    /// bytes are returned and the next call returns the failure without
    /// touching the buffer or the source.
    pub fn read_chunk(
        &mut self,
        dest: &mut [u8],
        max_bytes: usize,
    ) -> Result<ReadStatus> {
        if max_bytes == 0 {
            return Ok(ReadStatus::Read(0));
        }
        if max_bytes > dest.len() {
            return Err(IoUtilError::invalid_argument(format!(
                "requested {} bytes into a {} byte destination",
                max_bytes,
                dest.len()
            )));
        }
        if self.is_closed() {
            return Err(IoUtilError::Closed);
        }
        if let Some(err) = self.pending.take() {
            return Err(err);
        }

        let mut copied = self.copy_buffered(dest, max_bytes);
        if copied == max_bytes || self.eof {
            return Ok(status(copied));
        }

        // the buffer is drained here, refill at most once per call
        match self.refill() {
            Ok(()) => {}
            Err(err) if copied > 0 => {
                log::debug!(
                    "[read_chunk] refill failed after {} bytes: {}",
                    copied,
                    err
                );
                self.pending = Some(err);
                return Ok(ReadStatus::Read(copied));
            }
            Err(err) => return Err(err),
        }

        copied += self.copy_buffered(&mut dest[copied..], max_bytes - copied);
        Ok(status(copied))
    }

    fn copy_buffered(&mut self, dest: &mut [u8], max_bytes: usize) -> usize {
        let n = cmp::min(max_bytes, self.buffered());
        dest[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        n
    }

    /// Replaces the drained buffer with one read from the source.
    ///
    /// State is only updated once the read succeeded.
    fn refill(&mut self) -> Result<()> {
        let source = self.source.as_mut().ok_or(IoUtilError::Closed)?;
        let n = source.read(&mut self.buf)?;
        if n > self.buf.len() {
            return Err(IoUtilError::Other(anyhow!(
                "source reported {} bytes read into a {} byte buffer",
                n,
                self.buf.len()
            )));
        }

        self.pos = 0;
        self.filled = n;
        if n == 0 {
            log::trace!("[refill] source exhausted");
            self.eof = true;
        } else {
            log::trace!("[refill] {} bytes buffered", n);
        }
        Ok(())
    }

    /// Returns the buffered window, refilling it first if it is empty.
    ///
    /// An empty slice means end of stream.
    fn fill(&mut self) -> Result<&[u8]> {
        if self.is_closed() {
            return Err(IoUtilError::Closed);
        }
        if let Some(err) = self.pending.take() {
            return Err(err);
        }
        if self.pos == self.filled && !self.eof {
            self.refill()?;
        }
        Ok(&self.buf[self.pos..self.filled])
    }

    /// Closes the source and releases the buffer.
    ///
    /// The source is closed once; later calls return `Ok(())` without
    /// touching it. A failure to close is returned to the caller and the
    /// reader still ends up closed.
    pub fn close(&mut self) -> Result<()> {
        let mut source = match self.source.take() {
            Some(source) => source,
            None => return Ok(()),
        };

        log::debug!("Closing buffering reader");
        self.buf = Box::default();
        self.pos = 0;
        self.filled = 0;
        self.pending = None;

        source.close()?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    /// Size of the internal buffer, `0` once closed.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes that can be read without touching the source.
    pub fn buffered(&self) -> usize {
        self.filled - self.pos
    }

    /// Whether the source has reported end of data.
    pub fn source_exhausted(&self) -> bool {
        self.eof
    }

    pub fn get_ref(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Unwraps the source without closing it. Buffered bytes are lost.
    pub fn into_inner(mut self) -> Result<S> {
        self.source.take().ok_or(IoUtilError::Closed)
    }
}

impl<S: Source> Read for BufferingReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len();
        Ok(self.read_chunk(buf, len)?.bytes())
    }
}

impl<S: Source> BufRead for BufferingReader<S> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.fill()?)
    }

    fn consume(&mut self, amt: usize) {
        self.pos = cmp::min(self.pos.saturating_add(amt), self.filled);
    }
}

impl<S: Source> Drop for BufferingReader<S> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::warn!("Failed to close source on drop: {}", err);
        }
    }
}

impl<S: Source> fmt::Debug for BufferingReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferingReader")
            .field("capacity", &self.buf.len())
            .field("buffered", &self.buffered())
            .field("eof", &self.eof)
            .field("pending_error", &self.pending.is_some())
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn status(copied: usize) -> ReadStatus {
    if copied == 0 {
        ReadStatus::EndOfStream
    } else {
        ReadStatus::Read(copied)
    }
}
