//! Daily rotating file appender
//!
//! Writes records to `<directory>/<prefix>_<YYYYMMDD>.log`, one file per local
//! calendar day. The file for a day is opened lazily, in append mode, by the
//! first record captured on that day.

use crate::core::error::{LoggerError, Result};
use crate::core::log_record::LogRecord;
use crate::core::timestamp::log_file_name;
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::PathBuf;

/// File appender that rotates when the calendar day of the records changes
///
/// Owned exclusively by the background writer; producers never touch it.
///
/// # Examples
///
/// ```no_run
/// use rust_stream_logger::appenders::DailyFileAppender;
/// use rust_stream_logger::{LogLevel, LogRecord};
///
/// let mut appender = DailyFileAppender::new("/var/log/myapp", "server");
/// let record = LogRecord::new(LogLevel::Info, "listening on :8080");
/// appender.append(&record, &record.prefix()).unwrap();
/// appender.flush().unwrap();
/// ```
pub struct DailyFileAppender {
    directory: PathBuf,
    prefix: String,
    writer: Option<LineWriter<File>>,
    /// Day the open file belongs to
    current_day: Option<NaiveDate>,
}

impl DailyFileAppender {
    /// Create an appender; no file is touched until the first append.
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
            writer: None,
            current_day: None,
        }
    }

    /// Full path of the log file for `day`.
    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.directory.join(log_file_name(&self.prefix, day))
    }

    /// Day of the currently open file, if any.
    pub fn current_day(&self) -> Option<NaiveDate> {
        self.current_day.filter(|_| self.writer.is_some())
    }

    /// Path of the currently open file, if any.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.current_day().map(|day| self.path_for(day))
    }

    /// A record from a later day than the open file starts a new file.
    /// Records from an earlier day (clock stepped back) stay in the open one.
    fn should_rotate(&self, day: NaiveDate) -> bool {
        match self.current_day() {
            None => true,
            Some(open_day) => day > open_day,
        }
    }

    /// Close the current file and open the one for `day`
    fn rotate(&mut self, day: NaiveDate) -> Result<()> {
        // Explicitly drop writer to release file handle before reopening
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::io_operation(
                    "rotating log file",
                    format!("Failed to flush '{}'", self.path_for_current().display()),
                    e,
                )
            })?;
        }
        self.current_day = None;

        fs::create_dir_all(&self.directory).map_err(|e| {
            LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", self.directory.display()),
                e,
            )
        })?;

        let path = self.path_for(day);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        self.writer = Some(LineWriter::new(file));
        self.current_day = Some(day);
        Ok(())
    }

    fn path_for_current(&self) -> PathBuf {
        match self.current_day {
            Some(day) => self.path_for(day),
            None => self.directory.clone(),
        }
    }

    /// Append one record as `prefix + body + '\n'`, rotating first if needed.
    ///
    /// The line is handed to the operating system before this returns.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be opened or written
    pub fn append(&mut self, record: &LogRecord, prefix: &str) -> Result<()> {
        let day = record.day();
        if self.should_rotate(day) {
            self.rotate(day)?;
        }

        let mut line = String::with_capacity(prefix.len() + record.body().len() + 1);
        line.push_str(prefix);
        line.push_str(record.body());
        line.push('\n');

        let written = match self.writer.as_mut() {
            Some(writer) => writer.write_all(line.as_bytes()),
            None => return Err(LoggerError::other("File writer not initialized")),
        };
        written.map_err(|e| {
            LoggerError::io_operation(
                "writing log file",
                format!("Failed to append to '{}'", self.path_for_current().display()),
                e,
            )
        })
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for DailyFileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
