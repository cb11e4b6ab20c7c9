use io_error::IoUtilError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't open {path}: {source}")]
    OpenError { path: PathBuf, source: io::Error },

    #[error("Couldn't load config {path}: {message}")]
    ConfigLoadError { path: PathBuf, message: String },

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    IoUtilError(#[from] IoUtilError),
}
