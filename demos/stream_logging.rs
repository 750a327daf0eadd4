//! Stream-style logging example
//!
//! Builds messages piece by piece; each one is submitted when its builder
//! goes out of scope, including on early return.
//!
//! Run with: cargo run --example stream_logging

use rust_stream_logger::global;
use rust_stream_logger::prelude::*;
use std::fmt::Write;

fn parse_port(logger: &Logger, raw: &str) -> Option<u16> {
    let mut msg = logger.stream(LogLevel::Debug);
    msg.push("parsing port '").push(raw).push("'");
    let port = raw.parse().ok()?;
    msg.push(" -> ").push(port);
    Some(port)
}

fn main() -> Result<()> {
    println!("=== Rust Stream Logger - Stream Logging Example ===\n");

    let logger = Logger::builder()
        .directory("demo_logs")
        .file_prefix("stream")
        .try_build()?;

    // One statement, one record
    logger
        .stream(LogLevel::Info)
        .append("loaded ")
        .append(1200)
        .append(" rows in ")
        .append(3.25)
        .append(" s");

    // A scoped builder collecting values in a loop
    {
        let mut msg = logger.stream(LogLevel::Info);
        msg.push("active workers:");
        for id in [3, 7, 11] {
            msg.push(' ').push(id);
        }
        let _ = write!(msg, " (of {})", 16);
    }

    // Submitted on both return paths
    parse_port(&logger, "8080");
    parse_port(&logger, "http");

    // Line breaks are escaped so every record stays on one line
    logger.warning("multi\nline body");

    // Stream operator form
    let _ = logger.error_stream() << "retry " << 3 << " of " << 5;

    logger.shutdown();
    println!("Records written to {}", logger.output_directory().display());

    // The process-wide logger takes the same builder
    global::init_global(Logger::builder().directory("demo_logs").file_prefix("global"))?;
    global::info().append("process-wide logger ready");
    global::shutdown_global();

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
