//! Console backend
//!
//! Writes one line per message to stdout, or to stderr for `Warning` and
//! `Fatal`. Lines look like
//! `[2025-01-08T10:30:45.123Z] [INFO   ] app::server - listening (caused by: ...)`.

use super::timestamp::TimestampFormat;
use crate::core::{BackendId, Binding, Cause, Level, Logger, LoggerFactory, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Settings shared by every console logger a factory creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Least urgent level that is emitted
    pub min_level: Level,
    pub use_colors: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

/// Factory for [`ConsoleLogger`]
#[derive(Debug, Clone, Default)]
pub struct ConsoleLoggerFactory {
    config: ConsoleConfig,
}

impl ConsoleLoggerFactory {
    pub const BACKEND_ID: BackendId = BackendId::new("console");

    /// Environment variable read by [`from_env`](Self::from_env)
    pub const LEVEL_ENV: &'static str = "LAZYLOG_LEVEL";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// Default settings, with the minimum level taken from `LAZYLOG_LEVEL`.
    ///
    /// Unset or unparsable values leave the default `Info` in place.
    pub fn from_env() -> Self {
        let mut config = ConsoleConfig::default();
        if let Some(level) = std::env::var(Self::LEVEL_ENV)
            .ok()
            .and_then(|value| value.parse::<Level>().ok())
        {
            config.min_level = level;
        }
        Self { config }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = use_colors;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }
}

impl LoggerFactory for ConsoleLoggerFactory {
    fn backend_id(&self) -> BackendId {
        Self::BACKEND_ID
    }

    fn create(&self, binding: &Binding) -> Result<Arc<dyn Logger>> {
        Ok(Arc::new(ConsoleLogger::new(binding.as_str(), self.config.clone())))
    }
}

pub struct ConsoleLogger {
    name: String,
    min_level: RwLock<Level>,
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleLogger {
    pub fn new(name: impl Into<String>, config: ConsoleConfig) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(config.min_level),
            use_colors: config.use_colors,
            timestamp_format: config.timestamp_format,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> Level {
        *self.min_level.read()
    }

    /// Change the threshold of this logger; every holder of it sees the change
    pub fn set_min_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    fn format_line(
        &self,
        timestamp: &DateTime<Utc>,
        level: Level,
        cause: Option<Cause<'_>>,
        message: fmt::Arguments<'_>,
    ) -> String {
        let level_str = if self.use_colors {
            format!("{:7}", level).color(level.color_code()).to_string()
        } else {
            format!("{:7}", level)
        };

        let mut line = if self.timestamp_format.is_omitted() {
            format!("[{}] {} - {}", level_str, self.name, message)
        } else {
            format!(
                "[{}] [{}] {} - {}",
                self.timestamp_format.format(timestamp),
                level_str,
                self.name,
                message
            )
        };

        if let Some(cause) = cause {
            line.push_str(&format!(" (caused by: {})", cause));
        }
        line
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("name", &self.name)
            .field("min_level", &self.min_level())
            .finish()
    }
}

impl Logger for ConsoleLogger {
    fn is_enabled(&self, level: Level) -> bool {
        level >= *self.min_level.read()
    }

    fn write(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        message: fmt::Arguments<'_>,
    ) -> Result<()> {
        let line = self.format_line(&Utc::now(), level, cause, message);

        // Route Warning and Fatal to stderr, others to stdout
        match level {
            Level::Warning | Level::Fatal => writeln!(std::io::stderr().lock(), "{}", line)?,
            _ => writeln!(std::io::stdout().lock(), "{}", line)?,
        }
        Ok(())
    }
}
