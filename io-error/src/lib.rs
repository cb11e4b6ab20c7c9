use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoUtilError>;

#[derive(Error, Debug)]
pub enum IoUtilError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Null reference: {0}")]
    NullReference(String),
    #[error("Stream is closed")]
    Closed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IoUtilError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Lets `std::io` trait impls hand our errors back to their callers.
///
/// An [`IoUtilError::Io`] is unwrapped so the original [`io::ErrorKind`]
/// survives the round trip.
impl From<IoUtilError> for io::Error {
    fn from(e: IoUtilError) -> Self {
        match e {
            IoUtilError::Io(inner) => inner,
            IoUtilError::InvalidArgument(message) => {
                io::Error::new(io::ErrorKind::InvalidInput, message)
            }
            IoUtilError::NullReference(message) => {
                io::Error::new(io::ErrorKind::InvalidInput, message)
            }
            IoUtilError::Closed => io::Error::new(
                io::ErrorKind::BrokenPipe,
                IoUtilError::Closed.to_string(),
            ),
            IoUtilError::Other(other) => {
                io::Error::new(io::ErrorKind::Other, other.to_string())
            }
        }
    }
}
