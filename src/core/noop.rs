//! Logger that discards everything

use super::{
    error::Result,
    level::Level,
    logger::{Cause, Logger},
};
use once_cell::sync::Lazy;
use std::fmt::{self, Display};
use std::sync::Arc;

static SHARED: Lazy<Arc<dyn Logger>> = Lazy::new(|| Arc::new(NoOpLogger));

/// Used when no backend is available. Arguments are never inspected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// The process-wide instance handed out for every unresolved binding
    pub fn shared() -> Arc<dyn Logger> {
        SHARED.clone()
    }
}

impl Logger for NoOpLogger {
    #[inline]
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    #[inline]
    fn write(&self, _: Level, _: Option<Cause<'_>>, _: fmt::Arguments<'_>) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log(&self, _: Level, _: Option<Cause<'_>>, _: &str) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log_args(&self, _: Level, _: Option<Cause<'_>>, _: fmt::Arguments<'_>) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log_with(&self, _: Level, _: Option<Cause<'_>>, _: &dyn Fn() -> String) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log1(&self, _: Level, _: Option<Cause<'_>>, _: Option<&str>, _: &dyn Display) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log2(
        &self,
        _: Level,
        _: Option<Cause<'_>>,
        _: Option<&str>,
        _: &dyn Display,
        _: &dyn Display,
    ) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log3(
        &self,
        _: Level,
        _: Option<Cause<'_>>,
        _: Option<&str>,
        _: &dyn Display,
        _: &dyn Display,
        _: &dyn Display,
    ) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn log_n(
        &self,
        _: Level,
        _: Option<Cause<'_>>,
        _: Option<&str>,
        _: &[&dyn Display],
    ) -> Result<()> {
        Ok(())
    }
}
