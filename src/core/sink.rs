//! Sink trait for forwarding written records to an external consumer

/// Receives every record right after it has been appended to the log file.
///
/// Sinks run synchronously on the writer thread, so a slow sink stalls
/// persistence. Implementations must return quickly and never block; hand the
/// line off to your own buffer or channel instead.
///
/// Closures taking `(prefix, body)` are sinks too:
///
/// ```
/// use rust_stream_logger::Logger;
///
/// let logger = Logger::new();
/// logger.register_sink(|prefix: &str, body: &str| {
///     let _line = format!("{prefix}{body}");
/// });
/// ```
pub trait Sink: Send + Sync {
    /// `prefix` is the rendered `<L> YYYY.MM.DD HH:MM:SS.mmm ` header,
    /// `body` the record text.
    fn on_record(&self, prefix: &str, body: &str);
}

impl<F> Sink for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn on_record(&self, prefix: &str, body: &str) {
        self(prefix, body)
    }
}
