//! Tests for the process-wide logger
//!
//! Kept in their own test binary: the global instance can only be installed
//! once per process.

use rust_stream_logger::global;
use rust_stream_logger::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_global_logger_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = global::init_global(
        Logger::builder()
            .directory(temp_dir.path())
            .file_prefix("global")
            .min_level(LogLevel::Debug),
    )
    .expect("first init succeeds");
    assert_eq!(logger.file_prefix(), "global");
    assert!(std::ptr::eq(logger, global::global()));

    // A second installation is rejected and leaves the first in place
    let second = global::init_global(Logger::builder().file_prefix("other"));
    assert!(matches!(second, Err(LoggerError::InvalidConfiguration { .. })));
    assert_eq!(global::global().file_prefix(), "global");

    global::trace().append("below the minimum level");
    global::debug().append("debug ").append(1);
    global::info().append("info ").append(2);
    global::warning().append("warning ").append(3);
    global::error().append("error ").append(4);
    global::fatal().append("fatal ").append(5);
    rust_stream_logger::info!(global::global(), "macro {}", 6);

    global::shutdown_global();
    global::shutdown_global();
    assert!(!global::global().is_writer_running());

    let files: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("global_") && name.ends_with(".log"));

    let content = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    let letters: Vec<char> = lines.iter().map(|line| line.chars().next().unwrap()).collect();
    assert_eq!(letters, vec!['D', 'I', '*', 'E', '*', 'I']);
    assert!(lines[5].ends_with("macro 6"));
}
