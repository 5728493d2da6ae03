//! Error types for the logging facade

use super::binding::BackendId;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed error used for failures that originate outside this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// More than one backend is registered and none was selected
    #[error("Multiple logging backends registered ({backends}), please choose the backend explicitly")]
    AmbiguousBackend { count: usize, backends: String },

    /// The explicitly requested backend has no registered factory
    #[error("Requested logging backend '{backend}' is not registered")]
    UnregisteredBackend { backend: BackendId },

    /// A precondition on an argument was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required argument was absent
    #[error("{0}")]
    NullArgument(String),

    /// A validation failure whose error type is not a `LoggerError`
    #[error("Validation failed: {0}")]
    Validation(#[source] BoxError),

    /// The process-wide manager was already set up
    #[error("Logger manager already initialized")]
    AlreadyInitialized,

    /// IO error raised by a backend while emitting
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failure raised by a backend adapter, passed through untouched
    #[error(transparent)]
    Backend(BoxError),
}

impl LoggerError {
    /// Create an ambiguity error listing the registered backends
    pub fn ambiguous_backend<I>(backends: I) -> Self
    where
        I: IntoIterator<Item = BackendId>,
    {
        let mut names: Vec<&'static str> = backends.into_iter().map(|id| id.as_str()).collect();
        names.sort_unstable();
        LoggerError::AmbiguousBackend {
            count: names.len(),
            backends: names.join(", "),
        }
    }

    /// Create an unregistered backend error
    pub fn unregistered_backend(backend: BackendId) -> Self {
        LoggerError::UnregisteredBackend { backend }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LoggerError::InvalidArgument(msg.into())
    }

    /// Create a null argument error from a complete message
    pub fn null_argument<S: Into<String>>(msg: S) -> Self {
        LoggerError::NullArgument(msg.into())
    }

    /// Wrap a backend failure
    pub fn backend<E: Into<BoxError>>(source: E) -> Self {
        LoggerError::Backend(source.into())
    }
}
