//! Factory trait implemented by every backend adapter

use super::{
    binding::{BackendId, Binding},
    error::Result,
    logger::Logger,
};
use std::sync::Arc;

/// Builds loggers for one backend.
///
/// A factory holds no per-logger state; each call to [`create`](LoggerFactory::create)
/// returns a fresh adapter for the binding. Caching is the manager's job.
pub trait LoggerFactory: Send + Sync {
    /// The tag distinguishing this backend from every other one
    fn backend_id(&self) -> BackendId;

    /// Construct a logger bound to `binding`
    fn create(&self, binding: &Binding) -> Result<Arc<dyn Logger>>;
}
