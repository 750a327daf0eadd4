//! Stream-style message builder
//!
//! A [`MessageBuilder`] collects displayable values into one message body and
//! submits the finished record when it goes out of scope. Submission happens
//! in `Drop`, so the record is sent on every exit path, early returns and
//! unwinding included.

use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::logger::Logger;
use std::fmt::{self, Display, Write};
use std::ops::Shl;

/// Accumulates one log message and submits it on drop.
///
/// Values are appended in call order with no separators added. The capture
/// time of the record is the moment the builder is dropped.
///
/// # Examples
///
/// ```no_run
/// use rust_stream_logger::prelude::*;
/// use std::fmt::Write;
///
/// let logger = Logger::new();
///
/// // Chained: submitted at the end of the statement
/// logger.stream(LogLevel::Info).append("loaded ").append(42).append(" rows");
///
/// // Stream operator; the finished builder drops with the statement
/// let _ = logger.info_stream() << "cache hits: " << 97 << '%';
///
/// // Scoped: submitted when `msg` goes out of scope
/// {
///     let mut msg = logger.stream(LogLevel::Debug);
///     for id in [1, 2, 3] {
///         msg.push(id).push(' ');
///     }
///     write!(msg, "(took {} ms)", 12).unwrap();
/// }
/// ```
pub struct MessageBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    body: String,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            body: String::new(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Text accumulated so far
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Append a value and pass the builder on.
    pub fn append<T: Display>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append a value in place.
    pub fn push<T: Display>(&mut self, value: T) -> &mut Self {
        let _ = write!(self.body, "{}", value);
        self
    }
}

/// `builder << value` is `builder.append(value)`.
impl<T: Display> Shl<T> for MessageBuilder<'_> {
    type Output = Self;

    fn shl(self, value: T) -> Self {
        self.append(value)
    }
}

impl Write for MessageBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.push_str(s);
        Ok(())
    }
}

impl Drop for MessageBuilder<'_> {
    fn drop(&mut self) {
        let body = std::mem::take(&mut self.body);
        self.logger.submit(LogRecord::new(self.level, body));
    }
}
