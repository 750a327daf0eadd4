//! Main logger implementation

use super::{
    config::{normalize_directory, validate_file_prefix, LoggerConfig, HIGH_WATER_MARK},
    error::Result,
    log_level::LogLevel,
    log_record::LogRecord,
    message_builder::MessageBuilder,
    metrics::LoggerMetrics,
    sink::Sink,
    writer::{self, FileTarget},
};
use parking_lot::{Condvar, Mutex};
use std::mem;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

/// State shared between producers and the writer, guarded by one mutex
pub(crate) struct State {
    pub(crate) queue: Vec<LogRecord>,
    pub(crate) min_level: LogLevel,
    pub(crate) directory: PathBuf,
    pub(crate) file_prefix: String,
    pub(crate) sink: Option<Arc<dyn Sink>>,
    /// Cleared to ask the current writer to drain once more and exit
    pub(crate) running: bool,
    /// Set by shutdown; later submissions are discarded
    pub(crate) closed: bool,
}

pub(crate) struct Shared {
    pub(crate) state: Mutex<State>,
    pub(crate) wakeup: Condvar,
    pub(crate) metrics: LoggerMetrics,
}

/// Asynchronous logger writing to daily rotating files
///
/// Submitting a record only takes a short lock and pushes onto a queue; a
/// single background thread drains the queue, writes the records to
/// `<directory>/<prefix>_<YYYYMMDD>.log` and forwards each one to the
/// registered [`Sink`], if any.
///
/// Dropping the logger (or calling [`Logger::shutdown`]) writes everything
/// still queued and joins the writer thread.
///
/// # Example
///
/// ```no_run
/// use rust_stream_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .directory("/var/log/myapp")
///     .file_prefix("server")
///     .min_level(LogLevel::Info)
///     .build();
///
/// logger.info("server started");
/// logger.stream(LogLevel::Warning).append("queue depth ").append(1500);
/// ```
pub struct Logger {
    shared: Arc<Shared>,
    /// Handle of the running writer; also serialises writer restarts
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Logger {
    /// Logger writing `./log_<YYYYMMDD>.log` with every level enabled
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default(), None)
    }

    fn with_config(config: LoggerConfig, sink: Option<Arc<dyn Sink>>) -> Self {
        let state = State {
            queue: Vec::new(),
            min_level: config.min_level,
            directory: normalize_directory(config.directory),
            file_prefix: config.file_prefix,
            sink,
            running: false,
            closed: false,
        };
        let logger = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                wakeup: Condvar::new(),
                metrics: LoggerMetrics::new(),
            }),
            worker: Mutex::new(None),
        };

        let mut worker = logger.worker.lock();
        logger.start_writer(&mut worker);
        drop(worker);

        logger
    }

    /// Start a writer bound to the currently configured target.
    ///
    /// Callers hold the worker lock.
    fn start_writer(&self, worker: &mut Option<JoinHandle<()>>) {
        let target = {
            let mut state = self.shared.state.lock();
            if state.closed {
                return;
            }
            state.running = true;
            FileTarget {
                directory: state.directory.clone(),
                prefix: state.file_prefix.clone(),
            }
        };

        match writer::spawn(Arc::clone(&self.shared), target) {
            Ok(handle) => *worker = Some(handle),
            Err(e) => {
                self.shared.state.lock().running = false;
                eprintln!("[LOGGER ERROR] Failed to spawn log writer thread: {}", e);
            }
        }
    }

    /// Ask the writer to drain and exit, then join it.
    ///
    /// Callers hold the worker lock.
    fn stop_writer(&self, worker: &mut Option<JoinHandle<()>>) {
        let Some(handle) = worker.take() else {
            return;
        };

        self.shared.state.lock().running = false;
        self.shared.wakeup.notify_all();

        if let Err(e) = handle.join() {
            eprintln!("[LOGGER ERROR] Log writer thread panicked: {:?}", e);
        }
    }

    /// Stop the writer, apply `update`, start a writer on the new target.
    ///
    /// Skipped when `update` reports no change and the writer is healthy.
    fn reconfigure(&self, update: impl FnOnce(&mut State) -> bool) {
        let mut worker = self.worker.lock();

        let changed = update(&mut *self.shared.state.lock());
        let healthy = worker.as_ref().is_some_and(|handle| !handle.is_finished());
        if !changed && healthy {
            return;
        }

        self.stop_writer(&mut worker);
        self.start_writer(&mut worker);
    }

    /// Queue a finished record for the writer.
    ///
    /// Records below the minimum level are discarded. This never blocks on
    /// I/O and never fails; once queued a record is not dropped.
    pub fn submit(&self, record: LogRecord) {
        let mut state = self.shared.state.lock();

        if record.level() < state.min_level {
            drop(state);
            self.shared.metrics.record_filtered();
            return;
        }
        if state.closed {
            return;
        }

        state.queue.push(record);
        self.shared.metrics.record_submitted();
        let backlog = state.queue.len();
        drop(state);

        if backlog > HIGH_WATER_MARK {
            self.shared.metrics.record_high_water_wakeup();
            self.shared.wakeup.notify_one();
        }
    }

    /// Whether a record at `level` would currently pass the filter.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.shared.state.lock().min_level
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.submit(LogRecord::new(level, message.into()));
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Start a stream-style message; it is submitted when the builder drops.
    ///
    /// ```no_run
    /// # use rust_stream_logger::prelude::*;
    /// # let logger = Logger::new();
    /// let user = "alice";
    /// logger.stream(LogLevel::Info).append("login: ").append(user).append(" from ").append("10.0.0.1");
    /// ```
    pub fn stream(&self, level: LogLevel) -> MessageBuilder<'_> {
        MessageBuilder::new(self, level)
    }

    pub fn trace_stream(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Trace)
    }

    pub fn debug_stream(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Debug)
    }

    pub fn info_stream(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Info)
    }

    pub fn warning_stream(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Warning)
    }

    pub fn error_stream(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Error)
    }

    pub fn fatal_stream(&self) -> MessageBuilder<'_> {
        self.stream(LogLevel::Fatal)
    }

    /// Change the directory log files are written to.
    ///
    /// Everything queued before this call is written to the old directory
    /// first; the call returns once the new writer is running.
    pub fn set_output_directory(&self, directory: impl Into<PathBuf>) {
        let directory = normalize_directory(directory.into());
        self.reconfigure(move |state| {
            if state.directory == directory {
                return false;
            }
            state.directory = directory;
            true
        });
    }

    pub fn output_directory(&self) -> PathBuf {
        self.shared.state.lock().directory.clone()
    }

    /// Change the file name stem (`<prefix>_<YYYYMMDD>.log`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an empty prefix or one containing a
    /// path separator; the current prefix stays in effect.
    pub fn set_file_prefix(&self, prefix: impl Into<String>) -> Result<()> {
        let prefix = prefix.into();
        validate_file_prefix(&prefix)?;
        self.reconfigure(move |state| {
            if state.file_prefix == prefix {
                return false;
            }
            state.file_prefix = prefix;
            true
        });
        Ok(())
    }

    pub fn file_prefix(&self) -> String {
        self.shared.state.lock().file_prefix.clone()
    }

    /// Takes effect for the next submission.
    pub fn set_min_level(&self, level: LogLevel) {
        self.shared.state.lock().min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.shared.state.lock().min_level
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        let state = self.shared.state.lock();
        LoggerConfig {
            directory: state.directory.clone(),
            file_prefix: state.file_prefix.clone(),
            min_level: state.min_level,
        }
    }

    /// Install, replace or (with `None`) remove the sink.
    pub fn set_sink(&self, sink: Option<Arc<dyn Sink>>) {
        self.shared.state.lock().sink = sink;
    }

    pub fn register_sink<S: Sink + 'static>(&self, sink: S) {
        self.set_sink(Some(Arc::new(sink)));
    }

    pub fn clear_sink(&self) {
        self.set_sink(None);
    }

    pub fn has_sink(&self) -> bool {
        self.shared.state.lock().sink.is_some()
    }

    /// Block until every record submitted before this call has been written.
    ///
    /// If no healthy writer is running (it died on an I/O error, or was
    /// never started) a new one is started first and drains the queue.
    pub fn flush(&self) {
        let mut worker = self.worker.lock();

        let healthy = worker.as_ref().is_some_and(|handle| !handle.is_finished());
        if !healthy {
            self.stop_writer(&mut worker);
            self.start_writer(&mut worker);
        }

        self.stop_writer(&mut worker);
        self.start_writer(&mut worker);
    }

    /// False once shutdown ran or the writer stopped on an I/O failure.
    pub fn is_writer_running(&self) -> bool {
        self.worker
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_stream_logger::Logger;
    ///
    /// let logger = Logger::builder()
    ///     .directory(std::env::temp_dir())
    ///     .file_prefix("metrics_doc")
    ///     .build();
    /// let metrics = logger.metrics();
    /// println!("Written: {}", metrics.written_count());
    /// println!("Filtered: {}", metrics.filtered_count());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    /// Remove the sink, write out the queue and join the writer.
    ///
    /// Idempotent. Submissions after shutdown are discarded.
    pub fn shutdown(&self) {
        let mut worker = self.worker.lock();

        {
            let mut state = self.shared.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            state.sink = None;
        }

        self.stop_writer(&mut worker);

        // Only non-empty when the writer had already died
        let leftover = mem::take(&mut self.shared.state.lock().queue);
        if !leftover.is_empty() {
            self.shared.metrics.record_lost(leftover.len() as u64);
        }

        let lost = self.shared.metrics.lost_count();
        if lost > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} records never written",
                lost
            );
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use rust_stream_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .directory("/var/log/myapp")
///     .file_prefix("worker")
///     .min_level(LogLevel::Debug)
///     .sink(|prefix: &str, body: &str| eprintln!("{prefix}{body}"))
///     .build();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
        }
    }

    /// Start from an existing configuration snapshot
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config.directory = directory.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.file_prefix = prefix.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Use a sink that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the Logger, validating the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the file prefix is unusable
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(Logger::with_config(self.config, self.sink))
    }

    /// Build the Logger
    ///
    /// An unusable file prefix is reported and replaced by the default.
    pub fn build(mut self) -> Logger {
        if let Err(e) = self.config.validate() {
            eprintln!("[LOGGER WARNING] {}; using the default file prefix", e);
            self.config.file_prefix = LoggerConfig::default().file_prefix;
        }
        Logger::with_config(self.config, self.sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
