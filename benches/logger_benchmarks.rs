//! Criterion benchmarks for lazylog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lazylog::prelude::*;
use std::fmt;
use std::sync::Arc;

struct Sink {
    threshold: Level,
}

impl Logger for Sink {
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    fn write(&self, _: Level, _: Option<Cause<'_>>, message: fmt::Arguments<'_>) -> lazylog::Result<()> {
        black_box(message.to_string());
        Ok(())
    }
}

struct SinkFactory;

impl LoggerFactory for SinkFactory {
    fn backend_id(&self) -> BackendId {
        BackendId::new("sink")
    }

    fn create(&self, _binding: &Binding) -> lazylog::Result<Arc<dyn Logger>> {
        Ok(Arc::new(Sink {
            threshold: Level::Info,
        }))
    }
}

/// Argument that is costly to render
struct Expensive;

impl fmt::Display for Expensive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..64 {
            write!(f, "{:08x}", i * 2654435761u64)?;
        }
        Ok(())
    }
}

// ============================================================================
// Resolution Benchmarks
// ============================================================================

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    group.throughput(Throughput::Elements(1));

    let manager = LoggerManager::new(Registry::builder().register(SinkFactory).build());
    manager.get_logger("bench.cached").unwrap();

    group.bench_function("cached_name", |b| {
        b.iter(|| black_box(manager.get_logger(black_box("bench.cached")).unwrap()));
    });

    group.bench_function("cached_type", |b| {
        b.iter(|| black_box(manager.get_logger_for::<Sink>().unwrap()));
    });

    group.finish();
}

// ============================================================================
// Logging Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let manager = LoggerManager::new(Registry::builder().register(SinkFactory).build());
    let logger = manager.get_logger("bench.logging").unwrap();

    group.bench_function("disabled_expensive_arg", |b| {
        b.iter(|| logger.log1(Level::Debug, None, Some("{}"), black_box(&Expensive)));
    });

    group.bench_function("enabled_expensive_arg", |b| {
        b.iter(|| logger.log1(Level::Info, None, Some("{}"), black_box(&Expensive)));
    });

    group.bench_function("disabled_macro", |b| {
        b.iter(|| lazylog::debug!(logger, "{}", Expensive));
    });

    let noop = NoOpLogger::shared();
    group.bench_function("noop", |b| {
        b.iter(|| noop.log1(Level::Fatal, None, Some("{}"), black_box(&Expensive)));
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_logging);
criterion_main!(benches);
