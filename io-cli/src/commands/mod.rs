use std::fs::File;
use std::path::Path;

use clap::Subcommand;
use io_buffering::BufferingReader;

use crate::error::AppError;
use crate::models::config::ReaderConfig;

mod bytes;
mod lines;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Lines(lines::Lines),
    Bytes(bytes::Bytes),
}

impl Commands {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Commands::Lines(lines) => lines.run(),
            Commands::Bytes(bytes) => bytes.run(),
        }
    }
}

fn open_buffered(
    path: &Path,
    config: &ReaderConfig,
) -> Result<BufferingReader<File>, AppError> {
    let file = File::open(path).map_err(|source| AppError::OpenError {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufferingReader::new(file, config.buffer_size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use io_utils::count_newlines;
    use tempdir::TempDir;

    #[test]
    fn missing_file_is_reported_with_path() {
        let temp_dir = TempDir::new("io-cli").unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = open_buffered(&path, &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::OpenError { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn counts_lines_of_opened_file() {
        let temp_dir = TempDir::new("io-cli").unwrap();
        let path = temp_dir.path().join("myfile.txt");
        std::fs::write(&path, b"AAAA\nBBBB\n").unwrap();

        let config = ReaderConfig {
            buffer_size: 4,
            read_size: 3,
        };
        let mut reader = open_buffered(&path, &config).unwrap();
        assert_eq!(count_newlines(&mut reader, config.read_size).unwrap(), 3);
        reader.close().unwrap();
    }

    #[test]
    fn zero_buffer_size_is_rejected() {
        let temp_dir = TempDir::new("io-cli").unwrap();
        let path = temp_dir.path().join("myfile.txt");
        std::fs::write(&path, b"x").unwrap();

        let config = ReaderConfig {
            buffer_size: 0,
            read_size: 3,
        };
        let err = open_buffered(&path, &config).unwrap_err();
        assert!(matches!(err, AppError::IoUtilError(_)));
    }
}
