//! Process-wide logger manager
//!
//! The global manager is created on first use from the backends linked into
//! the build ([`Registry::discover`]), unless [`init`] installed a registry
//! before that. It lives until the process exits.

use crate::core::{
    binding::{BackendId, Binding},
    error::{LoggerError, Result},
    logger::Logger,
    manager::LoggerManager,
    registry::Registry,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

static GLOBAL_LOGGER_MANAGER: OnceCell<LoggerManager> = OnceCell::new();

/// Install the global manager with an explicit registry.
///
/// Must run before the first lookup; afterwards it fails with
/// [`LoggerError::AlreadyInitialized`] and the existing manager is kept.
///
/// # Example
///
/// ```
/// use lazylog::Registry;
///
/// lazylog::init(Registry::empty()).unwrap();
/// assert!(lazylog::init(Registry::empty()).is_err());
/// ```
pub fn init(registry: Registry) -> Result<()> {
    GLOBAL_LOGGER_MANAGER
        .set(LoggerManager::new(registry))
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Whether the global manager exists yet
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER_MANAGER.get().is_some()
}

/// The global manager, discovering backends on first access
pub fn manager() -> &'static LoggerManager {
    GLOBAL_LOGGER_MANAGER.get_or_init(|| LoggerManager::new(Registry::discover()))
}

/// Get a logger for a binding from the global manager
pub fn get_logger(binding: impl Into<Binding>) -> Result<Arc<dyn Logger>> {
    manager().get_logger(binding)
}

/// Get a logger for a binding on an explicit backend from the global manager
pub fn get_logger_with(binding: impl Into<Binding>, backend: BackendId) -> Result<Arc<dyn Logger>> {
    manager().get_logger_with(binding, backend)
}

/// Get a logger bound to the type `T` from the global manager
pub fn get_logger_for<T: ?Sized + 'static>() -> Result<Arc<dyn Logger>> {
    manager().get_logger_for::<T>()
}

/// Get a logger bound to the type `T` on an explicit backend from the global manager
pub fn get_logger_for_with<T: ?Sized + 'static>(backend: BackendId) -> Result<Arc<dyn Logger>> {
    manager().get_logger_for_with::<T>(backend)
}
