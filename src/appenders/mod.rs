//! Appender implementations

pub mod daily_file;

pub use daily_file::DailyFileAppender;
