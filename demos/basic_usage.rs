//! Basic logger usage example
//!
//! Writes a handful of records at different levels to a daily file under
//! `./demo_logs` and echoes them to the console.
//!
//! Run with: cargo run --example basic_usage

use rust_stream_logger::prelude::*;
use rust_stream_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Stream Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .directory("demo_logs")
        .file_prefix("basic")
        .min_level(LogLevel::Trace)
        .sink(ConsoleSink::new())
        .try_build()?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");
    logger.flush();

    println!("\n2. Raising the minimum level to Info:");
    logger.set_min_level(LogLevel::Info);
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    info!(logger, "Info message (visible), {} records filtered so far", logger.metrics().filtered_count());
    warning!(logger, "Warning message (visible)");
    logger.flush();

    println!("\n3. Written to {}", logger.output_directory().display());
    let metrics = logger.metrics();
    println!("   written:  {}", metrics.written_count());
    println!("   filtered: {}", metrics.filtered_count());

    logger.shutdown();
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
