use std::path::PathBuf;

use io_utils::count_newlines;

use super::open_buffered;
use crate::error::AppError;
use crate::models::config::ReaderArgs;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "lines", about = "Count the lines of a file")]
pub struct Lines {
    #[clap(value_parser, help = "File to read")]
    path: PathBuf,
    #[clap(flatten)]
    reader: ReaderArgs,
}

impl Lines {
    pub fn run(&self) -> Result<(), AppError> {
        let config = self.reader.resolve()?;
        let mut reader = open_buffered(&self.path, &config)?;

        let lines = count_newlines(&mut reader, config.read_size)?;
        reader.close()?;

        println!("{}", lines);
        Ok(())
    }
}
