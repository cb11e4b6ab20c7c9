mod preconditions;
mod stream;

pub use preconditions::{check_not_null, require};
pub use stream::{count_newlines, to_byte_array};
