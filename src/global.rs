//! Process-wide logger for call sites that have no logger handle
//!
//! Library code should take a `&Logger`; this instance exists for the outer
//! layer of an application. It is created on first use with the default
//! configuration (current directory, prefix `log`, every level enabled) unless
//! [`init_global`] ran first.
//!
//! Statics are never dropped, so call [`shutdown_global`] before the process
//! exits to write out what is still queued.

use crate::core::{Logger, LoggerBuilder, LoggerError, MessageBuilder, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created on first access.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Install a custom-configured process-wide logger.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the configuration is invalid or the
/// global logger already exists.
pub fn init_global(builder: LoggerBuilder) -> Result<&'static Logger> {
    if GLOBAL.get().is_some() {
        return Err(LoggerError::config("global logger", "already initialized"));
    }

    let logger = builder.try_build()?;
    // Lost a race with another initializer; the rejected logger shuts down on drop
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::config("global logger", "already initialized"))?;
    Ok(global())
}

/// Flush and stop the process-wide logger, if it was ever created.
pub fn shutdown_global() {
    if let Some(logger) = GLOBAL.get() {
        logger.shutdown();
    }
}

/// Stream-style trace message on the process-wide logger.
///
/// ```no_run
/// use rust_stream_logger::global;
///
/// global::info().append("started with ").append(4).append(" workers");
/// global::shutdown_global();
/// ```
pub fn trace() -> MessageBuilder<'static> {
    global().trace_stream()
}

pub fn debug() -> MessageBuilder<'static> {
    global().debug_stream()
}

pub fn info() -> MessageBuilder<'static> {
    global().info_stream()
}

pub fn warning() -> MessageBuilder<'static> {
    global().warning_stream()
}

pub fn error() -> MessageBuilder<'static> {
    global().error_stream()
}

pub fn fatal() -> MessageBuilder<'static> {
    global().fatal_stream()
}
