//! Reference backend adapters
//!
//! Each backend is compiled in behind its own feature and contributes one
//! factory to [`Registry::discover`](crate::Registry::discover).

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "log-backend")]
pub mod log_crate;
#[cfg(feature = "console")]
pub mod timestamp;

#[cfg(feature = "console")]
pub use console::{ConsoleConfig, ConsoleLogger, ConsoleLoggerFactory};
#[cfg(feature = "log-backend")]
pub use log_crate::{LogCrateFactory, LogCrateLogger};
#[cfg(feature = "console")]
pub use timestamp::TimestampFormat;
