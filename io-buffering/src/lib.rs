//! # IO Buffering
//!
//! `io-buffering` provides [`BufferingReader`], an unsynchronized buffered
//! reader over a byte [`Source`].
//!
//! The reader keeps one fixed-size buffer allocated at construction and
//! refills it from the source only once every buffered byte has been handed
//! out, so many small reads by the caller turn into a few large reads on the
//! source. A refill happens at most once per call: when the source
//! under-delivers, the caller gets what was obtained and is expected to call
//! again.
//!
//! ```
//! use io_buffering::{BufferingReader, ReadStatus};
//!
//! let mut reader = BufferingReader::new(&b"AAAA\nBBBB\n"[..], 4).unwrap();
//! let mut dest = [0u8; 3];
//! assert_eq!(reader.read_chunk(&mut dest, 3).unwrap(), ReadStatus::Read(3));
//! assert_eq!(&dest, b"AAA");
//! reader.close().unwrap();
//! ```

mod reader;
mod source;

pub use reader::{BufferingReader, ReadStatus, DEFAULT_BUFFER_SIZE};
pub use source::{ReadSource, Source};
