//! Timestamp formatting utilities
//!
//! Renders the fixed-layout line prefix (`<L> YYYY.MM.DD HH:MM:SS.mmm `) and
//! the date stamp used in daily log file names. Everything here works in the
//! local calendar and clock.

use super::log_level::LogLevel;
use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};
use std::fmt::Write;

/// Length of a rendered prefix: letter, space, 23 timestamp characters, space.
pub const PREFIX_LEN: usize = 26;

/// Render the line prefix for a record captured at `timestamp`.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use rust_stream_logger::core::timestamp::format_prefix;
/// use rust_stream_logger::LogLevel;
///
/// let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
/// assert_eq!(format_prefix(&ts, LogLevel::Info), "I 2024.03.09 07:05:02.000 ");
/// ```
pub fn format_prefix(timestamp: &DateTime<Local>, level: LogLevel) -> String {
    // chrono encodes a leap second as nanos >= 1_000_000_000
    let millis = timestamp.timestamp_subsec_millis().min(999);

    let mut prefix = String::with_capacity(PREFIX_LEN);
    let _ = write!(
        prefix,
        "{} {:04}.{:02}.{:02} {:02}:{:02}:{:02}.{:03} ",
        level.letter(),
        timestamp.year(),
        timestamp.month(),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second(),
        millis
    );
    prefix
}

/// `YYYYMMDD` stamp for a calendar day.
pub fn file_date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// File name for the log of `date`: `<prefix>_<YYYYMMDD>.log`.
pub fn log_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.log", prefix, file_date_stamp(date))
}
