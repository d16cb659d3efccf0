//! Per-destination delivery worker
//!
//! One background thread per destination drains its queue in batches, writes
//! each record to the sink in FIFO order, and flushes on a size or time
//! trigger. On shutdown the worker keeps draining until the queue is empty,
//! performs a final flush, and exits.

use std::io::Write;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::entry::{Destination, LogEntry};
use super::error::{LoggerError, Result};
use super::metrics::LoggerMetrics;
use super::queue::EntryQueue;

/// Default records moved out of the queue per locked drain.
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Default flush cadence for a quiet sink.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(200);

/// What a worker does with a live sink write failure.
///
/// Failures during the shutdown drain always propagate out of the worker,
/// regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteErrorPolicy {
    /// Report on stderr, count the failure, keep delivering.
    #[default]
    Continue,
    /// Stop the worker and surface the error at shutdown.
    Abort,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkerConfig {
    pub destination: Destination,
    pub batch_size: usize,
    pub flush_interval: Duration,
    pub policy: WriteErrorPolicy,
}

pub(crate) fn spawn(
    config: WorkerConfig,
    queue: Arc<EntryQueue>,
    metrics: Arc<LoggerMetrics>,
    sink: Box<dyn Write + Send>,
) -> JoinHandle<Result<()>> {
    thread::spawn(move || run(config, &queue, &metrics, sink))
}

fn run(
    config: WorkerConfig,
    queue: &EntryQueue,
    metrics: &LoggerMetrics,
    mut sink: Box<dyn Write + Send>,
) -> Result<()> {
    let mut batch: Vec<LogEntry> = Vec::with_capacity(config.batch_size);
    let mut last_flush = Instant::now();

    // Waiting / Draining, and the shutdown drain once the queue is closed:
    // drain_into keeps returning entries until shutdown is signaled and the
    // queue is empty.
    while queue.drain_into(&mut batch, config.batch_size, config.flush_interval) {
        let filled = batch.len() >= config.batch_size;
        write_batch(&config, queue, metrics, &mut sink, &mut batch)?;
        if filled || last_flush.elapsed() >= config.flush_interval {
            handle_sink_fault(&config, queue, metrics, sink.flush())?;
            last_flush = Instant::now();
        }
    }

    // Terminated: nothing queued may be left behind.
    sink.flush()
        .map_err(|source| LoggerError::sink_write(config.destination, source))
}

fn write_batch(
    config: &WorkerConfig,
    queue: &EntryQueue,
    metrics: &LoggerMetrics,
    sink: &mut Box<dyn Write + Send>,
    batch: &mut Vec<LogEntry>,
) -> Result<()> {
    for entry in batch.drain(..) {
        match sink.write_all(entry.text.as_bytes()) {
            Ok(()) => {
                metrics.record_delivered();
            }
            Err(source) => handle_sink_fault(config, queue, metrics, Err(source))?,
        }
    }
    Ok(())
}

/// Apply the write-error policy to a sink result.
///
/// During the shutdown drain every fault propagates; live faults propagate
/// only under `Abort`.
fn handle_sink_fault(
    config: &WorkerConfig,
    queue: &EntryQueue,
    metrics: &LoggerMetrics,
    result: std::io::Result<()>,
) -> Result<()> {
    let Err(source) = result else {
        return Ok(());
    };
    metrics.record_write_failure();
    if queue.is_shut_down() || config.policy == WriteErrorPolicy::Abort {
        return Err(LoggerError::sink_write(config.destination, source));
    }
    eprintln!(
        "[LOGGER ERROR] {} sink write failed: {}",
        config.destination, source
    );
    Ok(())
}
