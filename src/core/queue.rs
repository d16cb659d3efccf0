//! Bounded drop-oldest entry queue
//!
//! Each destination owns one of these. A channel cannot express drop-oldest
//! eviction, so the queue is a mutex-guarded deque with a condvar for worker
//! wakeup; the producer-side critical section is a push and nothing else.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::Duration;

use super::entry::LogEntry;

/// Default maximum queued records per destination.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug)]
struct QueueState {
    entries: VecDeque<LogEntry>,
    shutdown: bool,
}

/// Bounded FIFO shared between the dispatcher side and one delivery worker.
///
/// A push onto a full queue evicts the oldest entry instead of blocking the
/// producer; overflow loss is a live phenomenon only, never part of the
/// shutdown drain.
#[derive(Debug)]
pub struct EntryQueue {
    state: Mutex<QueueState>,
    available: Condvar,
    capacity: usize,
}

impl EntryQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
                shutdown: false,
            }),
            available: Condvar::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push a record, evicting the oldest when full.
    ///
    /// Returns `true` if an entry was evicted. Never blocks beyond the lock.
    pub fn push(&self, entry: LogEntry) -> bool {
        let mut state = self.state.lock();
        let evicted = if state.entries.len() >= self.capacity {
            state.entries.pop_front();
            true
        } else {
            false
        };
        state.entries.push_back(entry);
        drop(state);
        self.available.notify_one();
        evicted
    }

    /// Move up to `max` entries into `batch`, waiting up to `timeout` when
    /// the queue is empty.
    ///
    /// Returns `false` only once shutdown has been signaled and the queue is
    /// fully drained; a timeout with nothing queued returns `true` with an
    /// empty batch so the worker can honor its flush timer.
    pub fn drain_into(&self, batch: &mut Vec<LogEntry>, max: usize, timeout: Duration) -> bool {
        let mut state = self.state.lock();
        if state.entries.is_empty() {
            if state.shutdown {
                return false;
            }
            let _ = self.available.wait_for(&mut state, timeout);
            if state.entries.is_empty() {
                return !state.shutdown;
            }
        }
        let take = state.entries.len().min(max);
        batch.extend(state.entries.drain(..take));
        true
    }

    /// Signal the worker to finish draining and exit.
    pub fn shutdown(&self) {
        self.state.lock().shutdown = true;
        self.available.notify_all();
    }

    pub fn is_shut_down(&self) -> bool {
        self.state.lock().shutdown
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }
}
