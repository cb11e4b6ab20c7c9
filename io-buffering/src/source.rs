use std::fs::File;
use std::io::{self, Cursor, Read};

/// Underlying byte producer of a [`BufferingReader`](crate::BufferingReader).
///
/// Reading follows the [`Read`] contract: fill up to `buf.len()` bytes and
/// return how many were written, `0` meaning the source is exhausted.
/// `close` releases the resource; it is called at most once by the reader.
pub trait Source: Read {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Files are released by dropping the handle
impl Source for File {}

impl Source for &[u8] {}

impl<T: AsRef<[u8]>> Source for Cursor<T> {}

impl Source for io::Stdin {}

impl Source for io::StdinLock<'_> {}

impl Source for io::Empty {}

impl<S: Source + ?Sized> Source for Box<S> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Adapts any [`Read`] into a [`Source`] whose close does nothing beyond
/// dropping the reader.
///
/// Wrapping `&mut R` lends a reader to a [`BufferingReader`](crate::BufferingReader)
/// without letting it close the borrowed resource.
#[derive(Debug)]
pub struct ReadSource<R>(pub R);

impl<R: Read> Read for ReadSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<R: Read> Source for ReadSource<R> {}
