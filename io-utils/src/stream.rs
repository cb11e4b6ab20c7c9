use std::io::{self, Read};

use io_error::{IoUtilError, Result};

/// Reads `reader` to its end and returns the bytes.
pub fn to_byte_array<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let copied = io::copy(reader, &mut bytes)?;
    log::trace!("[to_byte_array] {} bytes copied", copied);
    Ok(bytes)
}

/// Counts lines by scanning `reader` for `\n` with reads of `read_size`
/// bytes.
///
/// The count starts at 1, so an input without newlines is one line and a
/// trailing newline opens an empty last line.
pub fn count_newlines<R: Read + ?Sized>(
    reader: &mut R,
    read_size: usize,
) -> Result<usize> {
    if read_size == 0 {
        return Err(IoUtilError::invalid_argument(
            "read size must be positive",
        ));
    }

    let mut buffer = vec![0u8; read_size];
    let mut count = 1;
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        count += buffer[..bytes_read]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
    }

    log::trace!("[count_newlines] {} lines", count);
    Ok(count)
}
