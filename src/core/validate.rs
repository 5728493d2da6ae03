//! Precondition checks with lazily built failure messages
//!
//! Both the message and the error are only constructed once a check has
//! actually failed, so call sites can describe failures with arbitrarily
//! expensive formatting at no cost on the success path.

use super::error::{BoxError, LoggerError, Result};

/// Check `predicate` and fail with the error built by `factory` if it is false.
///
/// `message` runs at most once, and only on failure. If `factory` produces a
/// [`LoggerError`] it is returned as-is; any other error type is wrapped in
/// [`LoggerError::Validation`].
///
/// # Examples
///
/// ```
/// use lazylog::core::validate::validate;
/// use lazylog::LoggerError;
///
/// let capacity = 0;
/// let result = validate(
///     || format!("capacity must be positive, got {}", capacity),
///     || capacity > 0,
///     LoggerError::InvalidArgument,
/// );
/// assert!(matches!(result, Err(LoggerError::InvalidArgument(_))));
/// ```
pub fn validate<M, P, F, E>(message: M, predicate: P, factory: F) -> Result<()>
where
    M: FnOnce() -> String,
    P: FnOnce() -> bool,
    F: FnOnce(String) -> E,
    E: Into<BoxError>,
{
    if predicate() {
        return Ok(());
    }

    let error: BoxError = factory(message()).into();
    match error.downcast::<LoggerError>() {
        Ok(error) => Err(*error),
        Err(other) => Err(LoggerError::Validation(other)),
    }
}

/// Unwrap `value`, failing with `"<param_name> must not be null"` when absent.
pub fn not_null<T>(param_name: &str, value: Option<T>) -> Result<T> {
    let message = || format!("{} must not be null", param_name);
    validate(message, || value.is_some(), LoggerError::NullArgument)?;
    value.ok_or_else(|| LoggerError::null_argument(message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, thiserror::Error)]
    #[error("custom: {0}")]
    struct CustomError(String);

    #[test]
    fn test_success_never_builds_message() {
        let built = Cell::new(0);
        let result = validate(
            || {
                built.set(built.get() + 1);
                "unused".to_string()
            },
            || true,
            LoggerError::InvalidArgument,
        );
        assert!(result.is_ok());
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn test_failure_builds_message_once() {
        let built = Cell::new(0);
        let result = validate(
            || {
                built.set(built.get() + 1);
                "limit exceeded".to_string()
            },
            || false,
            LoggerError::InvalidArgument,
        );
        assert_eq!(built.get(), 1);
        match result {
            Err(LoggerError::InvalidArgument(msg)) => assert_eq!(msg, "limit exceeded"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_foreign_error_is_wrapped() {
        let result = validate(|| "boom".to_string(), || false, CustomError);
        let err = result.unwrap_err();
        match err {
            LoggerError::Validation(source) => {
                let custom = source.downcast_ref::<CustomError>().expect("CustomError source");
                assert_eq!(custom.0, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_string_factory_is_wrapped() {
        let err = validate(|| "plain".to_string(), || false, |m| m).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: plain");
    }

    #[test]
    fn test_not_null() {
        let err = not_null::<&str>("x", None).unwrap_err();
        assert!(matches!(err, LoggerError::NullArgument(_)));
        assert_eq!(err.to_string(), "x must not be null");

        assert_eq!(not_null("x", Some(42)).unwrap(), 42);
    }
}
