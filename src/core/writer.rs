//! Background writer thread
//!
//! The writer is the only consumer of the queue. Each cycle it waits (up to
//! [`POLL_INTERVAL`], or until woken by the high-water mark or a stop request),
//! swaps the whole queue out under the lock, and writes the batch with the
//! lock released. On stop it makes one final drain so that everything queued
//! before the stop request lands in this writer's target; records queued later
//! stay in the shared queue for the next writer.

use super::config::POLL_INTERVAL;
use super::error::Result;
use super::log_record::LogRecord;
use super::logger::Shared;
use super::sink::Sink;
use crate::appenders::DailyFileAppender;
use std::any::Any;
use std::io;
use std::mem;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// File target a writer is bound to for its whole life
#[derive(Debug)]
pub(crate) struct FileTarget {
    pub(crate) directory: PathBuf,
    pub(crate) prefix: String,
}

pub(crate) fn spawn(shared: Arc<Shared>, target: FileTarget) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || run(&shared, target))
}

fn run(shared: &Shared, target: FileTarget) {
    let mut appender = DailyFileAppender::new(target.directory, target.prefix);

    loop {
        let (batch, sink) = {
            let mut state = shared.state.lock();
            if state.running && state.queue.is_empty() {
                shared.wakeup.wait_for(&mut state, POLL_INTERVAL);
            }
            if !state.running {
                break;
            }
            if state.queue.is_empty() {
                continue;
            }
            (mem::take(&mut state.queue), state.sink.clone())
        };

        if let Err(e) = write_batch(shared, &mut appender, batch, sink.as_deref()) {
            report_failure(shared, &e);
            return;
        }
    }

    let (batch, sink) = {
        let mut state = shared.state.lock();
        (mem::take(&mut state.queue), state.sink.clone())
    };
    if let Err(e) = write_batch(shared, &mut appender, batch, sink.as_deref()) {
        report_failure(shared, &e);
        return;
    }

    if let Err(e) = appender.flush() {
        eprintln!("[LOGGER ERROR] Failed to flush log file on writer stop: {}", e);
    }
}

/// Write a drained batch in arrival order.
///
/// On the first I/O error the rest of the batch is counted as lost and the
/// error is returned; records are never retried.
fn write_batch(
    shared: &Shared,
    appender: &mut DailyFileAppender,
    batch: Vec<LogRecord>,
    sink: Option<&dyn Sink>,
) -> Result<()> {
    let total = batch.len();

    for (idx, record) in batch.iter().enumerate() {
        let prefix = record.prefix();

        if let Err(e) = appender.append(record, &prefix) {
            shared.metrics.record_lost((total - idx) as u64);
            return Err(e);
        }
        shared.metrics.record_written();

        if let Some(sink) = sink {
            notify_sink(shared, sink, &prefix, record.body());
        }
    }

    Ok(())
}

/// Call the sink with panic isolation so a faulty sink cannot kill the writer.
fn notify_sink(shared: &Shared, sink: &dyn Sink, prefix: &str, body: &str) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        sink.on_record(prefix, body)
    }));

    if let Err(panic_info) = result {
        let count = shared.metrics.record_sink_panic() + 1;
        eprintln!(
            "[LOGGER CRITICAL] Sink panicked: {} (panic #{}). Records are still written to file.",
            panic_message(panic_info.as_ref()),
            count
        );
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn report_failure(shared: &Shared, error: &dyn std::error::Error) {
    shared.metrics.record_writer_failure();
    eprintln!(
        "[LOGGER ERROR] Log writer stopped: {}. \
         No records are persisted until the output target is reconfigured.",
        error
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_extraction() {
        let boxed: Box<dyn Any + Send> = Box::new("static str panic");
        assert_eq!(panic_message(boxed.as_ref()), "static str panic");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned panic"));
        assert_eq!(panic_message(boxed.as_ref()), "owned panic");

        let boxed: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(boxed.as_ref()), "Unknown panic");
    }
}
