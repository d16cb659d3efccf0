//! Logger and builder
//!
//! The [`Logger`] is the public entry point: it owns both queues and both
//! delivery workers, checks the severity threshold, formats records on the
//! caller thread (no I/O there), and hands them to the destination queue.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use super::config::{Config, SharedConfig};
use super::entry::{Destination, LogEntry};
use super::error::{LoggerError, Result};
use super::format;
use super::level::LogLevel;
use super::metrics::LoggerMetrics;
use super::queue::{EntryQueue, DEFAULT_CAPACITY};
use super::value::LogValue;
use super::worker::{
    self, WorkerConfig, WriteErrorPolicy, DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL,
};

/// Asynchronous dual-destination logger.
///
/// Records at `Error` and above route to the error sink, everything else to
/// the standard sink. Submission never blocks on I/O; under sustained queue
/// pressure the oldest unwritten record of the affected destination is
/// dropped (and counted) to admit the new one.
pub struct Logger {
    config: SharedConfig,
    out_queue: Arc<EntryQueue>,
    err_queue: Arc<EntryQueue>,
    out_handle: Option<JoinHandle<Result<()>>>,
    err_handle: Option<JoinHandle<Result<()>>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Bind two sinks and start both delivery workers with default settings.
    pub fn new(
        out_sink: impl Write + Send + 'static,
        err_sink: impl Write + Send + 'static,
    ) -> Self {
        Self::builder().build(out_sink, err_sink)
    }

    /// Convenience pair: stdout for the standard pipeline, stderr for errors.
    pub fn to_console() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Submit a record, routed by severity.
    ///
    /// No-op below the current threshold. Never fails and never blocks the
    /// caller beyond the queue lock.
    pub fn submit(&self, level: LogLevel, values: &[LogValue]) {
        self.dispatch(level, level.destination(), values);
    }

    /// Submit to the standard pipeline regardless of level.
    pub fn log_out(&self, level: LogLevel, values: &[LogValue]) {
        self.dispatch(level, Destination::Standard, values);
    }

    /// Submit to the error pipeline regardless of level.
    pub fn log_err(&self, level: LogLevel, values: &[LogValue]) {
        self.dispatch(level, Destination::Error, values);
    }

    fn dispatch(&self, level: LogLevel, destination: Destination, values: &[LogValue]) {
        let config = self.config.snapshot();
        if level < config.threshold {
            return;
        }
        let text = format::render(level, config.timestamps, values);
        self.metrics.record_submitted();
        let queue = match destination {
            Destination::Standard => &self.out_queue,
            Destination::Error => &self.err_queue,
        };
        if queue.push(LogEntry::new(destination, text)) {
            self.metrics.record_dropped();
        }
    }

    /// Set the minimum severity; effective for subsequent submits only.
    pub fn set_threshold(&self, level: LogLevel) {
        self.config.set_threshold(level);
    }

    /// Enable or disable the per-line UTC timestamp prefix.
    pub fn set_timestamps(&self, enabled: bool) {
        self.config.set_timestamps(enabled);
    }

    pub fn threshold(&self) -> LogLevel {
        self.config.snapshot().threshold
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Records lost to drop-oldest overflow so far.
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    /// Signal both workers, drain both queues fully, and join.
    ///
    /// No timeout is imposed: a clean shutdown never loses buffered records,
    /// so the wait is bounded only by the remaining queue contents. Returns
    /// the first sink fault encountered during the final drain, if any.
    pub fn shutdown(&mut self) -> Result<()> {
        self.out_queue.shutdown();
        self.err_queue.shutdown();

        let mut first_error = None;
        let handles = [
            (Destination::Standard, self.out_handle.take()),
            (Destination::Error, self.err_handle.take()),
        ];
        for (destination, handle) in handles {
            let Some(handle) = handle else { continue };
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    first_error.get_or_insert(e);
                }
                Err(_) => {
                    first_error.get_or_insert(LoggerError::WorkerPanicked { destination });
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Dropping without an explicit shutdown still drains both queues;
        // faults can only be reported, not returned, from here.
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] shutdown drain failed: {}", e);
        }
        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] {} records dropped under queue pressure (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use duolog::{Logger, LogLevel, WriteErrorPolicy};
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .threshold(LogLevel::Debug)
///     .timestamps(true)
///     .capacity(4096)
///     .batch_size(32)
///     .flush_interval(Duration::from_millis(100))
///     .write_error_policy(WriteErrorPolicy::Continue)
///     .build(std::io::stdout(), std::io::stderr());
/// ```
pub struct LoggerBuilder {
    threshold: LogLevel,
    timestamps: bool,
    capacity: usize,
    batch_size: usize,
    flush_interval: Duration,
    write_error_policy: WriteErrorPolicy,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Info,
            timestamps: false,
            capacity: DEFAULT_CAPACITY,
            batch_size: DEFAULT_BATCH_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            write_error_policy: WriteErrorPolicy::default(),
        }
    }

    /// Minimum severity accepted by `submit`.
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Prefix every line with a UTC timestamp.
    #[must_use = "builder methods return a new value"]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Per-destination queue capacity; the minimum is 1.
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Records moved out of a queue per locked drain.
    #[must_use = "builder methods return a new value"]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Flush cadence for a quiet sink.
    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Policy for live sink write failures.
    #[must_use = "builder methods return a new value"]
    pub fn write_error_policy(mut self, policy: WriteErrorPolicy) -> Self {
        self.write_error_policy = policy;
        self
    }

    /// Bind the sinks and start both delivery workers.
    pub fn build(
        self,
        out_sink: impl Write + Send + 'static,
        err_sink: impl Write + Send + 'static,
    ) -> Logger {
        let metrics = Arc::new(LoggerMetrics::new());
        let out_queue = Arc::new(EntryQueue::new(self.capacity));
        let err_queue = Arc::new(EntryQueue::new(self.capacity));

        let out_handle = worker::spawn(
            WorkerConfig {
                destination: Destination::Standard,
                batch_size: self.batch_size,
                flush_interval: self.flush_interval,
                policy: self.write_error_policy,
            },
            Arc::clone(&out_queue),
            Arc::clone(&metrics),
            Box::new(out_sink),
        );
        let err_handle = worker::spawn(
            WorkerConfig {
                destination: Destination::Error,
                batch_size: self.batch_size,
                flush_interval: self.flush_interval,
                policy: self.write_error_policy,
            },
            Arc::clone(&err_queue),
            Arc::clone(&metrics),
            Box::new(err_sink),
        );

        Logger {
            config: SharedConfig::new(Config {
                threshold: self.threshold,
                timestamps: self.timestamps,
            }),
            out_queue,
            err_queue,
            out_handle: Some(out_handle),
            err_handle: Some(err_handle),
            metrics,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SharedSink;

    #[test]
    fn test_builder_defaults() {
        let builder = LoggerBuilder::new();
        assert_eq!(builder.threshold, LogLevel::Info);
        assert!(!builder.timestamps);
        assert_eq!(builder.capacity, DEFAULT_CAPACITY);
        assert_eq!(builder.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(builder.flush_interval, DEFAULT_FLUSH_INTERVAL);
    }

    #[test]
    fn test_basic_routing() {
        let out = SharedSink::new();
        let err = SharedSink::new();
        let mut logger = Logger::new(out.clone(), err.clone());

        logger.submit(LogLevel::Info, &["to stdout".into()]);
        logger.submit(LogLevel::Error, &["to stderr".into()]);
        logger.shutdown().expect("clean shutdown");

        assert!(out.contents_utf8().contains("to stdout"));
        assert!(!out.contents_utf8().contains("to stderr"));
        assert!(err.contents_utf8().contains("to stderr"));
    }

    #[test]
    fn test_threshold_default_filters_debug() {
        let out = SharedSink::new();
        let mut logger = Logger::new(out.clone(), SharedSink::new());
        logger.submit(LogLevel::Debug, &["hidden".into()]);
        logger.submit(LogLevel::Info, &["visible".into()]);
        logger.shutdown().expect("clean shutdown");

        assert!(!out.contents_utf8().contains("hidden"));
        assert!(out.contents_utf8().contains("visible"));
    }

    #[test]
    fn test_explicit_pipeline_aliases() {
        let out = SharedSink::new();
        let err = SharedSink::new();
        let mut logger = Logger::new(out.clone(), err.clone());

        // Severity does not decide the pipeline for the explicit aliases.
        logger.log_out(LogLevel::Error, &["error on stdout".into()]);
        logger.log_err(LogLevel::Info, &["info on stderr".into()]);
        logger.shutdown().expect("clean shutdown");

        assert!(out.contents_utf8().contains("error on stdout"));
        assert!(err.contents_utf8().contains("info on stderr"));
    }

    #[test]
    fn test_shutdown_twice_is_harmless() {
        let mut logger = Logger::new(SharedSink::new(), SharedSink::new());
        logger.shutdown().expect("first shutdown");
        logger.shutdown().expect("second shutdown");
    }
}
