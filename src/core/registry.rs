//! Backend registry
//!
//! Maps every available [`LoggerFactory`] by its [`BackendId`]. A registry is
//! built once, either from the backends linked into this build (see
//! [`Registry::discover`]) or from an explicit registration table, and is
//! read-only afterwards.

use super::{binding::BackendId, factory::LoggerFactory};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Registry {
    factories: HashMap<BackendId, Arc<dyn LoggerFactory>>,
}

impl Registry {
    /// A registry with no backends; every lookup resolves to the no-op logger
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collect the backends compiled into this build.
    ///
    /// Each enabled backend feature contributes its factory:
    /// `console` registers [`ConsoleLoggerFactory`](crate::backends::ConsoleLoggerFactory)
    /// and `log-backend` registers [`LogCrateFactory`](crate::backends::LogCrateFactory).
    #[must_use]
    pub fn discover() -> Self {
        Self::builder().with_discovered().build()
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Number of distinct backends
    pub fn count(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn get(&self, backend: &BackendId) -> Option<&Arc<dyn LoggerFactory>> {
        self.factories.get(backend)
    }

    pub fn contains(&self, backend: &BackendId) -> bool {
        self.factories.contains_key(backend)
    }

    /// The factory to use implicitly, present only when exactly one is registered
    pub fn the_only_factory(&self) -> Option<&Arc<dyn LoggerFactory>> {
        if self.factories.len() == 1 {
            self.factories.values().next()
        } else {
            None
        }
    }

    /// Registered backend ids, in no particular order
    pub fn backend_ids(&self) -> impl Iterator<Item = BackendId> + '_ {
        self.factories.keys().copied()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<BackendId> = self.backend_ids().collect();
        ids.sort_unstable();
        f.debug_struct("Registry").field("backends", &ids).finish()
    }
}

/// Explicit registration table for a [`Registry`]
#[derive(Default)]
pub struct RegistryBuilder {
    factories: HashMap<BackendId, Arc<dyn LoggerFactory>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under its own backend id.
    ///
    /// A later registration for the same id replaces the earlier one.
    #[must_use = "builder methods return a new value"]
    pub fn register<F: LoggerFactory + 'static>(self, factory: F) -> Self {
        self.register_arc(Arc::new(factory))
    }

    #[must_use = "builder methods return a new value"]
    pub fn register_arc(mut self, factory: Arc<dyn LoggerFactory>) -> Self {
        self.factories.insert(factory.backend_id(), factory);
        self
    }

    /// Add every backend linked into this build
    #[must_use = "builder methods return a new value"]
    pub fn with_discovered(self) -> Self {
        #[allow(unused_mut)]
        let mut builder = self;

        #[cfg(feature = "console")]
        {
            builder = builder.register(crate::backends::ConsoleLoggerFactory::from_env());
        }

        #[cfg(feature = "log-backend")]
        {
            builder = builder.register(crate::backends::LogCrateFactory::new());
        }

        builder
    }

    pub fn build(self) -> Registry {
        Registry {
            factories: self.factories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{binding::Binding, error::Result, logger::Logger, noop::NoOpLogger};

    struct Stub(&'static str);

    impl LoggerFactory for Stub {
        fn backend_id(&self) -> BackendId {
            BackendId::new(self.0)
        }

        fn create(&self, _binding: &Binding) -> Result<Arc<dyn Logger>> {
            Ok(NoOpLogger::shared())
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::empty();
        assert_eq!(registry.count(), 0);
        assert!(registry.is_empty());
        assert!(registry.the_only_factory().is_none());
        assert!(registry.get(&BackendId::new("a")).is_none());
    }

    #[test]
    fn test_single_factory() {
        let registry = Registry::builder().register(Stub("a")).build();
        assert_eq!(registry.count(), 1);
        let only = registry.the_only_factory().expect("single factory");
        assert_eq!(only.backend_id(), BackendId::new("a"));
    }

    #[test]
    fn test_multiple_factories() {
        let registry = Registry::builder()
            .register(Stub("a"))
            .register(Stub("b"))
            .build();
        assert_eq!(registry.count(), 2);
        assert!(registry.the_only_factory().is_none());
        assert!(registry.contains(&BackendId::new("b")));

        let mut ids: Vec<_> = registry.backend_ids().collect();
        ids.sort();
        assert_eq!(ids, vec![BackendId::new("a"), BackendId::new("b")]);
    }

    #[test]
    fn test_same_id_replaces() {
        let first: Arc<dyn LoggerFactory> = Arc::new(Stub("a"));
        let second: Arc<dyn LoggerFactory> = Arc::new(Stub("a"));
        let registry = Registry::builder()
            .register_arc(first)
            .register_arc(second.clone())
            .build();
        assert_eq!(registry.count(), 1);
        let stored = registry.get(&BackendId::new("a")).unwrap();
        assert!(Arc::ptr_eq(stored, &second));
    }

    #[cfg(all(feature = "console", not(feature = "log-backend")))]
    #[test]
    fn test_discover_default_features() {
        let registry = Registry::discover();
        assert_eq!(registry.count(), 1);
        assert!(registry.contains(&crate::backends::ConsoleLoggerFactory::BACKEND_ID));
    }
}
