//! Channel sink for live viewers
//!
//! Forwards each written line (`prefix + body`) into a bounded
//! `crossbeam_channel`. A viewer thread owns the receiving end and keeps its
//! own bounded history; the writer never waits on it.

use crate::core::Sink;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sink that hands lines to another thread without blocking
///
/// When the channel is full or the receiver is gone the line is dropped and
/// counted.
///
/// # Example
///
/// ```no_run
/// use rust_stream_logger::prelude::*;
/// use std::sync::Arc;
///
/// let (sink, lines) = ChannelSink::bounded(256);
/// let logger = Logger::builder().shared_sink(Arc::new(sink)).build();
///
/// std::thread::spawn(move || {
///     for line in lines {
///         println!("viewer: {}", line);
///     }
/// });
///
/// logger.info("shown live");
/// ```
pub struct ChannelSink {
    sender: Sender<String>,
    dropped: AtomicU64,
}

impl ChannelSink {
    pub fn new(sender: Sender<String>) -> Self {
        Self {
            sender,
            dropped: AtomicU64::new(0),
        }
    }

    /// Create a sink together with the receiver for its lines
    pub fn bounded(capacity: usize) -> (Self, Receiver<String>) {
        let (sender, receiver) = bounded(capacity);
        (Self::new(sender), receiver)
    }

    /// Lines discarded because the channel was full or disconnected
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Sink for ChannelSink {
    fn on_record(&self, prefix: &str, body: &str) {
        let mut line = String::with_capacity(prefix.len() + body.len());
        line.push_str(prefix);
        line.push_str(body);

        match self.sender.try_send(line) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
