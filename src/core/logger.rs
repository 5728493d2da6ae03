//! The logger capability every backend adapter implements

use super::{
    error::Result,
    level::Level,
    template::Template,
    validate,
};
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Error value attached to a log call as its cause
pub type Cause<'a> = &'a (dyn Error + 'static);

/// A logger bound to one binding on one backend.
///
/// Adapters implement [`is_enabled`](Logger::is_enabled) and
/// [`write`](Logger::write); the provided `log*` methods gate all message
/// construction behind `is_enabled`, so arguments are never formatted for a
/// level the backend would discard.
///
/// Backend failures are returned as-is to the caller.
pub trait Logger: Send + Sync {
    /// Whether a message at `level` would currently be emitted
    fn is_enabled(&self, level: Level) -> bool;

    /// Emit a message that already passed the level check
    fn write(&self, level: Level, cause: Option<Cause<'_>>, message: fmt::Arguments<'_>)
        -> Result<()>;

    /// Log a literal message
    fn log(&self, level: Level, cause: Option<Cause<'_>>, message: &str) -> Result<()> {
        self.log_args(level, cause, format_args!("{}", message))
    }

    /// Log pre-captured format arguments, as produced by `format_args!`
    fn log_args(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        message: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.write(level, cause, message)
    }

    /// Log a message produced by `supplier`, which only runs when enabled
    fn log_with(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        supplier: &dyn Fn() -> String,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let message = supplier();
        self.write(level, cause, format_args!("{}", message))
    }

    fn log1(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        format: Option<&str>,
        arg: &dyn Display,
    ) -> Result<()> {
        self.log_n(level, cause, format, &[arg])
    }

    fn log2(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        format: Option<&str>,
        arg1: &dyn Display,
        arg2: &dyn Display,
    ) -> Result<()> {
        self.log_n(level, cause, format, &[arg1, arg2])
    }

    fn log3(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        format: Option<&str>,
        arg1: &dyn Display,
        arg2: &dyn Display,
        arg3: &dyn Display,
    ) -> Result<()> {
        self.log_n(level, cause, format, &[arg1, arg2, arg3])
    }

    /// Log a template with any number of positional arguments.
    ///
    /// Fails with a null argument error when `format` is absent, before the
    /// backend is consulted.
    fn log_n(
        &self,
        level: Level,
        cause: Option<Cause<'_>>,
        format: Option<&str>,
        args: &[&dyn Display],
    ) -> Result<()> {
        let format = validate::not_null("format", format)?;
        if !self.is_enabled(level) {
            return Ok(());
        }
        let rendered = Template::new(format).with_args(args);
        self.write(level, cause, format_args!("{}", rendered))
    }

    fn trace(&self, message: &str) -> Result<()> {
        self.log(Level::Trace, None, message)
    }

    fn debug(&self, message: &str) -> Result<()> {
        self.log(Level::Debug, None, message)
    }

    fn info(&self, message: &str) -> Result<()> {
        self.log(Level::Info, None, message)
    }

    fn warning(&self, message: &str) -> Result<()> {
        self.log(Level::Warning, None, message)
    }

    fn fatal(&self, message: &str) -> Result<()> {
        self.log(Level::Fatal, None, message)
    }
}

macro_rules! forward_logger {
    ($($ptr:ty),+) => {$(
        impl<L: Logger + ?Sized> Logger for $ptr {
            #[inline]
            fn is_enabled(&self, level: Level) -> bool {
                (**self).is_enabled(level)
            }

            #[inline]
            fn write(
                &self,
                level: Level,
                cause: Option<Cause<'_>>,
                message: fmt::Arguments<'_>,
            ) -> Result<()> {
                (**self).write(level, cause, message)
            }

            #[inline]
            fn log(&self, level: Level, cause: Option<Cause<'_>>, message: &str) -> Result<()> {
                (**self).log(level, cause, message)
            }

            #[inline]
            fn log_args(
                &self,
                level: Level,
                cause: Option<Cause<'_>>,
                message: fmt::Arguments<'_>,
            ) -> Result<()> {
                (**self).log_args(level, cause, message)
            }

            #[inline]
            fn log_with(
                &self,
                level: Level,
                cause: Option<Cause<'_>>,
                supplier: &dyn Fn() -> String,
            ) -> Result<()> {
                (**self).log_with(level, cause, supplier)
            }

            #[inline]
            fn log_n(
                &self,
                level: Level,
                cause: Option<Cause<'_>>,
                format: Option<&str>,
                args: &[&dyn Display],
            ) -> Result<()> {
                (**self).log_n(level, cause, format, args)
            }
        }
    )+};
}

forward_logger!(&L, Box<L>, Arc<L>);

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let threshold = Level::ALL.into_iter().find(|level| self.is_enabled(*level));
        f.debug_struct("Logger")
            .field("threshold", &threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Recording {
        threshold: Level,
        lines: Mutex<Vec<(Level, String, Option<String>)>>,
    }

    impl Recording {
        fn new(threshold: Level) -> Self {
            Self {
                threshold,
                lines: Mutex::new(Vec::new()),
            }
        }
    }

    impl Logger for Recording {
        fn is_enabled(&self, level: Level) -> bool {
            level >= self.threshold
        }

        fn write(
            &self,
            level: Level,
            cause: Option<Cause<'_>>,
            message: fmt::Arguments<'_>,
        ) -> Result<()> {
            self.lines
                .lock()
                .push((level, message.to_string(), cause.map(|c| c.to_string())));
            Ok(())
        }
    }

    struct Expensive<'a>(&'a AtomicUsize);

    impl Display for Expensive<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("expensive")
        }
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        let logger = Recording::new(Level::Info);
        let evaluated = AtomicUsize::new(0);

        logger
            .log1(Level::Debug, None, Some("{}"), &Expensive(&evaluated))
            .unwrap();
        logger
            .log_with(Level::Trace, None, &|| {
                evaluated.fetch_add(1, Ordering::SeqCst);
                String::from("never")
            })
            .unwrap();
        logger
            .log_args(Level::Debug, None, format_args!("{}", Expensive(&evaluated)))
            .unwrap();

        assert_eq!(evaluated.load(Ordering::SeqCst), 0);
        assert!(logger.lines.lock().is_empty());
    }

    #[test]
    fn test_enabled_level_formats_once() {
        let logger = Recording::new(Level::Info);
        let evaluated = AtomicUsize::new(0);

        logger
            .log2(Level::Warning, None, Some("{} and {}"), &Expensive(&evaluated), &7)
            .unwrap();

        assert_eq!(evaluated.load(Ordering::SeqCst), 1);
        let lines = logger.lines.lock();
        assert_eq!(lines[0].0, Level::Warning);
        assert_eq!(lines[0].1, "expensive and 7");
    }

    #[test]
    fn test_missing_format_fails_before_emitting() {
        let logger = Recording::new(Level::Trace);
        let err = logger.log1(Level::Info, None, None, &1).unwrap_err();
        assert!(matches!(err, LoggerError::NullArgument(_)));
        assert_eq!(err.to_string(), "format must not be null");
        assert!(logger.lines.lock().is_empty());
    }

    #[test]
    fn test_missing_format_fails_even_when_disabled() {
        let logger = Recording::new(Level::Fatal);
        assert!(logger.log3(Level::Debug, None, None, &1, &2, &3).is_err());
    }

    #[test]
    fn test_cause_is_passed_through() {
        let logger = Recording::new(Level::Trace);
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");

        logger
            .log_n(Level::Fatal, Some(&cause), Some("{} {} {} {}"), &[&1, &2, &3, &4])
            .unwrap();

        let lines = logger.lines.lock();
        assert_eq!(lines[0].1, "1 2 3 4");
        assert_eq!(lines[0].2.as_deref(), Some("missing file"));
    }

    #[test]
    fn test_level_shortcuts() {
        let logger = Recording::new(Level::Debug);
        logger.trace("t").unwrap();
        logger.debug("d").unwrap();
        logger.info("i").unwrap();
        logger.warning("w").unwrap();
        logger.fatal("f").unwrap();

        let levels: Vec<Level> = logger.lines.lock().iter().map(|l| l.0).collect();
        assert_eq!(
            levels,
            vec![Level::Debug, Level::Info, Level::Warning, Level::Fatal]
        );
    }

    #[test]
    fn test_shared_logger_debug_output() {
        let logger: Arc<dyn Logger> = Arc::new(Recording::new(Level::Warning));
        assert_eq!(format!("{:?}", logger), "Logger { threshold: Some(Warning), .. }");

        let result: Result<Arc<dyn Logger>> = Err(LoggerError::invalid_argument("x"));
        assert!(matches!(result.unwrap_err(), LoggerError::InvalidArgument(_)));
    }
}
