//! Logger manager metrics
//!
//! Counters describing how logger lookups were served. The facade never logs
//! about itself, so these counters are the only window into resolution.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lookup statistics for a [`LoggerManager`](crate::LoggerManager)
///
/// # Example
///
/// ```
/// use lazylog::ManagerMetrics;
///
/// let metrics = ManagerMetrics::new();
/// metrics.record_construction();
/// metrics.record_hit();
/// metrics.record_hit();
///
/// assert_eq!(metrics.lookups(), 3);
/// assert_eq!(metrics.constructions(), 1);
/// ```
#[derive(Debug)]
pub struct ManagerMetrics {
    /// Lookups answered from the cache
    cache_hits: AtomicU64,

    /// Loggers built by a factory (or the no-op fallback)
    constructions: AtomicU64,

    /// Lookups rejected by the selection policy or a failing factory
    failures: AtomicU64,
}

impl ManagerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            cache_hits: AtomicU64::new(0),
            constructions: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn constructions(&self) -> u64 {
        self.constructions.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Successful lookups, cached or freshly built
    pub fn lookups(&self) -> u64 {
        self.cache_hits() + self.constructions()
    }

    #[inline]
    pub fn record_hit(&self) -> u64 {
        self.cache_hits.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_construction(&self) -> u64 {
        self.constructions.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Cache hit rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no lookup succeeded yet.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.cache_hits() as f64;
        let total = self.lookups() as f64;
        if total == 0.0 {
            0.0
        } else {
            (hits / total) * 100.0
        }
    }
}

impl Default for ManagerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ManagerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            cache_hits: AtomicU64::new(self.cache_hits()),
            constructions: AtomicU64::new(self.constructions()),
            failures: AtomicU64::new(self.failures()),
        }
    }
}
