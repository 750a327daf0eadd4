//! Live sink example
//!
//! Forwards every written record to a viewer thread over a bounded channel,
//! the way a UI log panel would subscribe to the logger.
//!
//! Run with: cargo run --example live_sink

use rust_stream_logger::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Stream Logger - Live Sink Example ===\n");

    let (sink, lines) = ChannelSink::bounded(256);
    let logger = Logger::builder()
        .directory("demo_logs")
        .file_prefix("live")
        .min_level(LogLevel::Debug)
        .sink(sink)
        .try_build()?;

    let viewer = thread::spawn(move || {
        let mut shown = 0;
        // Ends once the logger drops the sink on shutdown
        for line in lines.iter() {
            println!("[viewer] {}", line);
            shown += 1;
        }
        shown
    });

    for step in 0..5 {
        logger.stream(LogLevel::Info).append("step ").append(step).append(" done");
        thread::sleep(Duration::from_millis(50));
    }
    logger.debug("debug records reach the viewer too");
    logger.trace("trace is below the minimum level and never shown");

    logger.shutdown();
    let shown = viewer.join().unwrap_or(0);
    println!("\nViewer displayed {} records", shown);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
