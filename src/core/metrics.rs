//! Logger metrics for observability
//!
//! Counters for monitoring logger health: how many records were accepted,
//! filtered, written or lost, and how often the background writer was woken
//! early or failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_stream_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_submitted();
/// metrics.record_written();
///
/// assert_eq!(metrics.submitted_count(), 1);
/// assert_eq!(metrics.written_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records accepted into the queue
    submitted: AtomicU64,

    /// Records dropped by the severity filter
    filtered: AtomicU64,

    /// Records appended to a log file
    written: AtomicU64,

    /// Records drained but never written because the writer failed
    lost: AtomicU64,

    /// Times the queue crossed the high-water mark and woke the writer early
    high_water_wakeups: AtomicU64,

    /// Times a writer thread terminated on an I/O failure
    writer_failures: AtomicU64,

    /// Times a sink panicked while handling a record
    sink_panics: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            written: AtomicU64::new(0),
            lost: AtomicU64::new(0),
            high_water_wakeups: AtomicU64::new(0),
            writer_failures: AtomicU64::new(0),
            sink_panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn submitted_count(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lost_count(&self) -> u64 {
        self.lost.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn high_water_wakeups(&self) -> u64 {
        self.high_water_wakeups.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writer_failures(&self) -> u64 {
        self.writer_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_panics(&self) -> u64 {
        self.sink_panics.load(Ordering::Relaxed)
    }

    /// Record an enqueued record. Returns the previous count.
    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record `count` records lost with a failed batch
    #[inline]
    pub fn record_lost(&self, count: u64) -> u64 {
        self.lost.fetch_add(count, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_high_water_wakeup(&self) -> u64 {
        self.high_water_wakeups.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_writer_failure(&self) -> u64 {
        self.writer_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_panic(&self) -> u64 {
        self.sink_panics.fetch_add(1, Ordering::Relaxed)
    }

    /// Records accepted but not yet written or lost.
    pub fn pending_count(&self) -> u64 {
        self.submitted_count()
            .saturating_sub(self.written_count())
            .saturating_sub(self.lost_count())
    }

    /// Reset all metrics to zero
    ///
    /// Useful for testing or periodic reset of metrics.
    pub fn reset(&self) {
        self.submitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        self.lost.store(0, Ordering::Relaxed);
        self.high_water_wakeups.store(0, Ordering::Relaxed);
        self.writer_failures.store(0, Ordering::Relaxed);
        self.sink_panics.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            submitted: AtomicU64::new(self.submitted_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            written: AtomicU64::new(self.written_count()),
            lost: AtomicU64::new(self.lost_count()),
            high_water_wakeups: AtomicU64::new(self.high_water_wakeups()),
            writer_failures: AtomicU64::new(self.writer_failures()),
            sink_panics: AtomicU64::new(self.sink_panics()),
        }
    }
}
