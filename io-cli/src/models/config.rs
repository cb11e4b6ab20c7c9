use std::fs::File;
use std::path::{Path, PathBuf};

use io_buffering::DEFAULT_BUFFER_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const DEFAULT_READ_SIZE: usize = 8192;

/// Buffering parameters, loadable from a JSON file such as
/// `{ "buffer_size": 65536, "read_size": 1000 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Capacity of the reader's internal buffer
    pub buffer_size: usize,
    /// Size of each read issued against the reader
    pub read_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
            read_size: DEFAULT_READ_SIZE,
        }
    }
}

impl ReaderConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|source| AppError::OpenError {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_reader(file).map_err(|err| {
            AppError::ConfigLoadError {
                path: path.to_owned(),
                message: err.to_string(),
            }
        })
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct ReaderArgs {
    #[clap(long, help = "JSON file with buffer_size and read_size")]
    config: Option<PathBuf>,
    #[clap(long, help = "Internal buffer size of the reader, in bytes")]
    buffer_size: Option<usize>,
    #[clap(long, help = "Size of each read issued by the command, in bytes")]
    read_size: Option<usize>,
}

impl ReaderArgs {
    /// Config file values, overridden by explicit flags.
    pub fn resolve(&self) -> Result<ReaderConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => ReaderConfig::load(path)?,
            None => ReaderConfig::default(),
        };
        if let Some(buffer_size) = self.buffer_size {
            config.buffer_size = buffer_size;
        }
        if let Some(read_size) = self.read_size {
            config.read_size = read_size;
        }
        log::debug!("Resolved reader config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn flags_override_file() {
        let temp_dir = TempDir::new("io-cli").unwrap();
        let config_path = temp_dir.path().join("reader.json");
        std::fs::write(&config_path, r#"{ "buffer_size": 4, "read_size": 3 }"#)
            .unwrap();

        let args = ReaderArgs {
            config: Some(config_path),
            buffer_size: None,
            read_size: Some(100),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.buffer_size, 4);
        assert_eq!(config.read_size, 100);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: ReaderConfig =
            serde_json::from_str(r#"{ "read_size": 10 }"#).unwrap();
        assert_eq!(config.buffer_size, 65536);
        assert_eq!(config.read_size, 10);
    }

    #[test]
    fn broken_config_is_reported() {
        let temp_dir = TempDir::new("io-cli").unwrap();
        let config_path = temp_dir.path().join("reader.json");
        std::fs::write(&config_path, "not json").unwrap();

        let err = ReaderConfig::load(&config_path).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoadError { .. }));
    }
}
