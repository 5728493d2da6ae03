//! Bridge backend for the `log` crate
//!
//! Each logger uses its binding as the `log` target and defers the level
//! decision to whatever `log::Log` implementation the application installed.

use crate::core::{BackendId, Binding, Cause, Level, Logger, LoggerFactory, Result};
use std::fmt;
use std::sync::Arc;

/// Factory for [`LogCrateLogger`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateFactory;

impl LogCrateFactory {
    pub const BACKEND_ID: BackendId = BackendId::new("log");

    pub fn new() -> Self {
        LogCrateFactory
    }
}

impl LoggerFactory for LogCrateFactory {
    fn backend_id(&self) -> BackendId {
        Self::BACKEND_ID
    }

    fn create(&self, binding: &Binding) -> Result<Arc<dyn Logger>> {
        Ok(Arc::new(LogCrateLogger::new(binding.as_str())))
    }
}

#[derive(Debug, Clone)]
pub struct LogCrateLogger {
    target: String,
}

impl LogCrateLogger {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// `log` has no fatal level, so `Fatal` maps to `Error`
    pub fn native_level(level: Level) -> log::Level {
        match level {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Warning => log::Level::Warn,
            Level::Fatal => log::Level::Error,
            Level::Info => log::Level::Info,
        }
    }
}

impl Logger for LogCrateLogger {
    fn is_enabled(&self, level: Level) -> bool {
        let native = Self::native_level(level);
        native <= log::max_level()
            && log::logger().enabled(
                &log::Metadata::builder()
                    .level(native)
                    .target(&self.target)
                    .build(),
            )
    }

    fn write(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        message: fmt::Arguments<'_>,
    ) -> Result<()> {
        let native = Self::native_level(level);
        match cause {
            Some(cause) => log::logger().log(
                &log::Record::builder()
                    .args(format_args!("{} (caused by: {})", message, cause))
                    .level(native)
                    .target(&self.target)
                    .build(),
            ),
            None => log::logger().log(
                &log::Record::builder()
                    .args(message)
                    .level(native)
                    .target(&self.target)
                    .build(),
            ),
        }
        Ok(())
    }
}
