use std::path::PathBuf;

use io_utils::to_byte_array;

use super::open_buffered;
use crate::error::AppError;
use crate::models::config::ReaderArgs;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "bytes", about = "Read a whole file and print its size")]
pub struct Bytes {
    #[clap(value_parser, help = "File to read")]
    path: PathBuf,
    #[clap(flatten)]
    reader: ReaderArgs,
}

impl Bytes {
    pub fn run(&self) -> Result<(), AppError> {
        let config = self.reader.resolve()?;
        let mut reader = open_buffered(&self.path, &config)?;

        let bytes = to_byte_array(&mut reader)?;
        reader.close()?;

        println!("{}", bytes.len());
        Ok(())
    }
}
