//! Log record structure

use super::log_level::LogLevel;
use super::timestamp::format_prefix;
use chrono::{DateTime, Local, NaiveDate};

/// One finished log message, waiting in the queue or already written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: DateTime<Local>,
    level: LogLevel,
    body: String,
}

impl LogRecord {
    /// Escape line terminators so a record always occupies exactly one line.
    ///
    /// A line feed or carriage return becomes the two characters `\n` or
    /// `\r` and a literal backslash is doubled, so the escaping is reversible
    /// and callers cannot inject fake records into the file. Tabs are kept
    /// verbatim.
    fn sanitize_body(body: &str) -> String {
        if !body.contains(['\n', '\r', '\\']) {
            return body.to_owned();
        }

        let mut escaped = String::with_capacity(body.len() + 8);
        for c in body.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Capture a record stamped with the current local time.
    pub fn new(level: LogLevel, body: impl AsRef<str>) -> Self {
        Self::at(Local::now(), level, body)
    }

    /// Build a record with an explicit capture time.
    pub fn at(timestamp: DateTime<Local>, level: LogLevel, body: impl AsRef<str>) -> Self {
        Self {
            timestamp,
            level,
            body: Self::sanitize_body(body.as_ref()),
        }
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Local calendar day the record was captured on; selects its log file.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Rendered `<L> YYYY.MM.DD HH:MM:SS.mmm ` prefix.
    pub fn prefix(&self) -> String {
        format_prefix(&self.timestamp, self.level)
    }
}
