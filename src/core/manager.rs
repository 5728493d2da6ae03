//! Logger manager: backend selection and the logger cache
//!
//! The manager owns an immutable [`Registry`] snapshot and a concurrent cache
//! of logger instances keyed by `(binding, backend)`. Each key owns a slot
//! that is filled at most once. The map is only locked to find or insert a
//! slot, so building one logger never holds up lookups for other keys.

use super::{
    binding::{BackendId, Binding},
    error::{LoggerError, Result},
    factory::LoggerFactory,
    logger::Logger,
    metrics::ManagerMetrics,
    noop::NoOpLogger,
    registry::Registry,
};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Backend segment of the cache key when no factory was resolved
const NOOP_BACKEND: &str = "noop";

/// Structured cache key; `backend` is `None` for the no-op fallback
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    backend: Option<BackendId>,
    binding: Binding,
}

type Slot = Arc<OnceCell<Arc<dyn Logger>>>;

pub struct LoggerManager {
    registry: Registry,
    cache: DashMap<CacheKey, Slot>,
    metrics: ManagerMetrics,
}

impl LoggerManager {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            cache: DashMap::new(),
            metrics: ManagerMetrics::new(),
        }
    }

    /// Resolve a logger using the implicit backend.
    ///
    /// With no backend registered this yields the no-op logger. With exactly
    /// one it is used. With more than one the call fails with
    /// [`LoggerError::AmbiguousBackend`]; the manager never picks one.
    ///
    /// # Example
    ///
    /// ```
    /// use lazylog::{Level, Logger, LoggerManager, Registry};
    /// use std::sync::Arc;
    ///
    /// let manager = LoggerManager::new(Registry::empty());
    /// let first = manager.get_logger("jobs.scheduler").unwrap();
    /// let second = manager.get_logger("jobs.scheduler").unwrap();
    /// assert!(Arc::ptr_eq(&first, &second));
    /// assert!(!first.is_enabled(Level::Fatal));
    /// ```
    pub fn get_logger(&self, binding: impl Into<Binding>) -> Result<Arc<dyn Logger>> {
        if self.registry.count() > 1 {
            self.metrics.record_failure();
            return Err(LoggerError::ambiguous_backend(self.registry.backend_ids()));
        }
        self.resolve(&binding.into(), self.registry.the_only_factory())
    }

    /// Resolve a logger on an explicitly chosen backend.
    ///
    /// Fails with [`LoggerError::UnregisteredBackend`] if `backend` has no
    /// factory in the registry.
    pub fn get_logger_with(
        &self,
        binding: impl Into<Binding>,
        backend: BackendId,
    ) -> Result<Arc<dyn Logger>> {
        let Some(factory) = self.registry.get(&backend) else {
            self.metrics.record_failure();
            return Err(LoggerError::unregistered_backend(backend));
        };
        self.resolve(&binding.into(), Some(factory))
    }

    /// Resolve a logger bound to the type `T`
    pub fn get_logger_for<T: ?Sized + 'static>(&self) -> Result<Arc<dyn Logger>> {
        self.get_logger(Binding::of::<T>())
    }

    /// Resolve a logger bound to the type `T` on an explicit backend
    pub fn get_logger_for_with<T: ?Sized + 'static>(
        &self,
        backend: BackendId,
    ) -> Result<Arc<dyn Logger>> {
        self.get_logger_with(Binding::of::<T>(), backend)
    }

    /// Printable key for `binding` on `backend` (`None` meaning the no-op
    /// fallback).
    ///
    /// Only a display form: the cache itself compares the backend tag and the
    /// binding structurally, so type bindings are told apart by `TypeId` even
    /// when two types print the same name.
    pub fn cache_key(binding: &Binding, backend: Option<BackendId>) -> String {
        let backend = backend.map_or(NOOP_BACKEND, |id| id.as_str());
        format!("{}{}::{}", binding.key_prefix(), backend, binding.as_str())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn metrics(&self) -> &ManagerMetrics {
        &self.metrics
    }

    /// Number of cached logger instances
    pub fn cached_count(&self) -> usize {
        self.cache
            .iter()
            .filter(|slot| slot.value().get().is_some())
            .count()
    }

    fn resolve(
        &self,
        binding: &Binding,
        factory: Option<&Arc<dyn LoggerFactory>>,
    ) -> Result<Arc<dyn Logger>> {
        let key = CacheKey {
            backend: factory.map(|f| f.backend_id()),
            binding: binding.clone(),
        };

        // Shard locks are held only while the slot is fetched or inserted
        let existing = self.cache.get(&key).map(|slot| Arc::clone(slot.value()));
        let slot = match existing {
            Some(slot) => slot,
            None => Arc::clone(self.cache.entry(key.clone()).or_default().value()),
        };

        // Callers racing on this key wait here; other keys are unaffected
        let mut constructed = false;
        let result = slot
            .get_or_try_init(|| {
                constructed = true;
                match factory {
                    Some(factory) => factory.create(binding),
                    None => Ok(NoOpLogger::shared()),
                }
            })
            .map(Arc::clone);

        match result {
            Ok(logger) => {
                if constructed {
                    self.metrics.record_construction();
                } else {
                    self.metrics.record_hit();
                }
                Ok(logger)
            }
            Err(err) => {
                self.metrics.record_failure();
                drop(slot);
                // Drop the empty slot unless another caller is still using it
                self.cache.remove_if(&key, |_, slot| {
                    slot.get().is_none() && Arc::strong_count(slot) == 1
                });
                Err(err)
            }
        }
    }
}

impl fmt::Debug for LoggerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerManager")
            .field("registry", &self.registry)
            .field("cached", &self.cached_count())
            .field("metrics", &self.metrics)
            .finish()
    }
}
