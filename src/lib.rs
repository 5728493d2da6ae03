//! # lazylog
//!
//! A logging facade with lazy message construction and pluggable backends.
//!
//! ## Features
//!
//! - **Lazy**: message templates and arguments are only formatted once the
//!   backend has confirmed the level is enabled
//! - **Pluggable**: backends are registered by [`BackendId`] and resolved
//!   once per process
//! - **Cached**: repeated lookups for a binding return the same logger instance
//! - **Thread Safe**: concurrent lookups build each logger exactly once
//!
//! ```
//! use lazylog::prelude::*;
//! use std::sync::Arc;
//!
//! struct Worker;
//!
//! # fn main() -> lazylog::Result<()> {
//! let manager = LoggerManager::new(Registry::empty());
//! let logger = manager.get_logger_for::<Worker>()?;
//! assert!(Arc::ptr_eq(&logger, &manager.get_logger_for::<Worker>()?));
//!
//! logger.log2(Level::Info, None, Some("processed {} of {}"), &3, &10)?;
//! lazylog::info!(logger, "worker {} ready", 1)?;
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BackendId, Binding, Cause, Level, Logger, LoggerError, LoggerFactory, LoggerManager,
        ManagerMetrics, NoOpLogger, Registry, RegistryBuilder, Result,
    };
    pub use crate::global::{get_logger, get_logger_for, get_logger_for_with, get_logger_with};
}

#[cfg(feature = "console")]
pub use backends::{ConsoleConfig, ConsoleLogger, ConsoleLoggerFactory, TimestampFormat};
#[cfg(feature = "log-backend")]
pub use backends::{LogCrateFactory, LogCrateLogger};
pub use crate::core::{
    not_null, validate, BackendId, Binding, BoxError, Cause, Level, Logger, LoggerError,
    LoggerFactory, LoggerManager, ManagerMetrics, NoOpLogger, Registry, RegistryBuilder,
    Rendered, Result, Template,
};
pub use global::{
    get_logger, get_logger_for, get_logger_for_with, get_logger_with, init, is_initialized,
    manager,
};
