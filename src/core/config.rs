//! Logger configuration and engine constants

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Queue length above which every submission wakes the writer immediately
pub const HIGH_WATER_MARK: usize = 1024;

/// How long the writer sleeps between drains when nobody wakes it
pub const POLL_INTERVAL: Duration = Duration::from_millis(300);

pub const DEFAULT_DIRECTORY: &str = ".";
pub const DEFAULT_FILE_PREFIX: &str = "log";

/// Snapshot of the runtime-settable logger configuration
///
/// # Example
///
/// ```
/// use rust_stream_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::default();
/// assert_eq!(config.file_prefix, "log");
/// assert_eq!(config.min_level, LogLevel::Trace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Directory the daily log files are written to
    pub directory: PathBuf,
    /// Stem of the log file names: `<file_prefix>_<YYYYMMDD>.log`
    pub file_prefix: String,
    /// Records below this level are discarded on submission
    pub min_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            min_level: LogLevel::Trace,
        }
    }
}

impl LoggerConfig {
    /// Check that the configuration names a usable file target
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the file prefix is unusable
    pub fn validate(&self) -> Result<()> {
        validate_file_prefix(&self.file_prefix)
    }
}

/// A file prefix must be a plain, non-empty file name stem.
pub fn validate_file_prefix(prefix: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        return Err(LoggerError::config("file_prefix", "must not be empty"));
    }
    if prefix.contains(['/', '\\']) {
        return Err(LoggerError::config(
            "file_prefix",
            format!("'{}' must not contain path separators", prefix),
        ));
    }
    Ok(())
}

/// An empty directory means the current directory.
pub(crate) fn normalize_directory(directory: PathBuf) -> PathBuf {
    if directory.as_os_str().is_empty() {
        PathBuf::from(DEFAULT_DIRECTORY)
    } else {
        directory
    }
}
