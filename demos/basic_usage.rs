//! Basic facade usage example
//!
//! Demonstrates resolving cached loggers on the console backend and lazy
//! message construction.
//!
//! Run with: cargo run --example basic_usage

use lazylog::prelude::*;
use lazylog::ConsoleLoggerFactory;
use std::fmt;
use std::sync::Arc;

struct OrderService;

/// Argument that announces when it is rendered
struct Report;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        println!("   (report rendered)");
        f.write_str("42 orders")
    }
}

fn main() -> Result<()> {
    println!("=== lazylog - Basic Usage Example ===\n");

    let registry = Registry::builder()
        .register(ConsoleLoggerFactory::new().min_level(Level::Info))
        .build();
    let manager = LoggerManager::new(registry);

    println!("1. Resolving loggers:");
    let logger = manager.get_logger_for::<OrderService>()?;
    let again = manager.get_logger_for::<OrderService>()?;
    println!("   same instance: {}", Arc::ptr_eq(&logger, &again));

    println!("\n2. Logging at different levels:");
    logger.info("service started")?;
    logger.log2(Level::Warning, None, Some("queue {} is {}% full"), &"orders", &91)?;
    lazylog::info!(logger, "listening on port {}", 8080)?;

    println!("\n3. Disabled levels skip formatting:");
    logger.log1(Level::Debug, None, Some("{}"), &Report)?;
    logger.log1(Level::Info, None, Some("{}"), &Report)?;

    println!("\n4. Errors as causes:");
    let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    lazylog::fatal!(logger, cause = &cause, "flush failed")?;

    let metrics = manager.metrics();
    println!(
        "\n   constructions: {}, cache hits: {}",
        metrics.constructions(),
        metrics.cache_hits()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
