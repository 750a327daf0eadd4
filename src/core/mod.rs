//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod message_builder;
pub mod metrics;
pub mod sink;
pub mod timestamp;
mod writer;

pub use config::{LoggerConfig, HIGH_WATER_MARK, POLL_INTERVAL};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use message_builder::MessageBuilder;
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::format_prefix;
