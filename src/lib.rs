//! # Rust Stream Logger
//!
//! An in-process asynchronous logger: application threads hand finished
//! messages to a queue and return immediately, while one background thread
//! writes them to daily log files and forwards them to an optional sink.
//!
//! ## Features
//!
//! - **Non-blocking producers**: submitting a record never waits on disk I/O
//! - **Daily rotation**: `<directory>/<prefix>_<YYYYMMDD>.log`, one record per line
//! - **Stream-style messages**: builders that submit themselves when dropped
//! - **Live sinks**: forward every written record to a console or a viewer channel
//!
//! ## Example
//!
//! ```no_run
//! use rust_stream_logger::prelude::*;
//! use rust_stream_logger::info;
//!
//! let logger = Logger::builder()
//!     .directory("logs")
//!     .file_prefix("app")
//!     .min_level(LogLevel::Debug)
//!     .build();
//!
//! info!(logger, "listening on port {}", 8080);
//! logger.stream(LogLevel::Debug).append("cache size: ").append(512);
//! ```
//!
//! Each line in the file looks like `I 2024.03.09 07:05:02.123 listening on port 8080`.

pub mod macros;

pub mod appenders;
pub mod core;
pub mod global;
pub mod sinks;

pub mod prelude {
    pub use crate::appenders::DailyFileAppender;
    pub use crate::core::{
        LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        MessageBuilder, Result, Sink,
    };
    pub use crate::sinks::ChannelSink;
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
}

pub use appenders::DailyFileAppender;
pub use core::{
    format_prefix, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, MessageBuilder, Result, Sink, HIGH_WATER_MARK, POLL_INTERVAL,
};
pub use global::{global, init_global, shutdown_global};
pub use sinks::ChannelSink;
#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
