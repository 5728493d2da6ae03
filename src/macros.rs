//! Logging macros for ergonomic, lazily formatted messages.
//!
//! The macros capture their arguments with `format_args!`, so nothing is
//! formatted unless the logger reports the level as enabled. Each macro
//! evaluates to the `Result` returned by the logger.
//!
//! # Examples
//!
//! ```
//! use lazylog::prelude::*;
//! use lazylog::{info, warn};
//!
//! # fn main() -> lazylog::Result<()> {
//! let manager = LoggerManager::new(Registry::empty());
//! let logger = manager.get_logger("server")?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // With a cause
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "slow disk");
//! warn!(logger, cause = &err, "Flush took {} ms", 1200)?;
//! # Ok(())
//! # }
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use lazylog::prelude::*;
/// # let logger = NoOpLogger::shared();
/// use lazylog::log;
/// log!(logger, Level::Info, "Simple message").unwrap();
/// log!(logger, Level::Fatal, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, cause = $cause:expr, $($arg:tt)+) => {
        $crate::Logger::log_args(&$logger, $level, Some($cause), format_args!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::log_args(&$logger, $level, None, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use lazylog::prelude::*;
/// # let logger = NoOpLogger::shared();
/// use lazylog::trace;
/// trace!(logger, "Entering function: calculate()").unwrap();
/// trace!(logger, "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, cause = $cause:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, cause = $cause, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use lazylog::prelude::*;
/// # let logger = NoOpLogger::shared();
/// use lazylog::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, cause = $cause:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, cause = $cause, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, cause = $cause:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, cause = $cause, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, cause = $cause:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, cause = $cause, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use lazylog::prelude::*;
/// # let logger = NoOpLogger::shared();
/// use lazylog::fatal;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// fatal!(logger, cause = &err, "Unable to recover").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, cause = $cause:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, cause = $cause, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
