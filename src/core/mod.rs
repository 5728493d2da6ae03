//! Core facade types and traits

pub mod binding;
pub mod error;
pub mod factory;
pub mod level;
pub mod logger;
pub mod manager;
pub mod metrics;
pub mod noop;
pub mod registry;
pub mod template;
pub mod validate;

pub use binding::{BackendId, Binding};
pub use error::{BoxError, LoggerError, Result};
pub use factory::LoggerFactory;
pub use level::Level;
pub use logger::{Cause, Logger};
pub use manager::LoggerManager;
pub use metrics::ManagerMetrics;
pub use noop::NoOpLogger;
pub use registry::{Registry, RegistryBuilder};
pub use template::{Rendered, Template};
pub use validate::{not_null, validate};
