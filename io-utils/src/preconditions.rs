use io_error::{IoUtilError, Result};

/// Returns the value inside `argument`, or
/// [`IoUtilError::NullReference`] carrying `message` if there is none.
#[inline]
pub fn check_not_null<T>(argument: Option<T>, message: &str) -> Result<T> {
    match argument {
        Some(value) => Ok(value),
        None => Err(IoUtilError::NullReference(message.to_owned())),
    }
}

/// [`check_not_null`] with a generic message.
#[inline]
pub fn require<T>(argument: Option<T>) -> Result<T> {
    check_not_null(argument, "argument is null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_is_returned() {
        let value = check_not_null(Some("notNull"), "value").unwrap();
        assert_eq!(value, "notNull");
        assert_eq!(require(Some(42)).unwrap(), 42);
    }

    #[test]
    fn missing_value_carries_message() {
        let err = check_not_null::<&str>(None, "config path").unwrap_err();
        assert!(
            matches!(err, IoUtilError::NullReference(ref m) if m == "config path")
        );

        let err = require::<u8>(None).unwrap_err();
        assert_eq!(err.to_string(), "Null reference: argument is null");
    }
}
