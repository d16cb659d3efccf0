//! Logger observability counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters for logger health.
///
/// Overflow drops are the number to watch: they are the visible side of the
/// lossy-under-pressure guarantee. A non-zero `write_failures` count means a
/// sink rejected writes while the `Continue` policy was active.
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    submitted: AtomicU64,
    delivered: AtomicU64,
    dropped: AtomicU64,
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    /// Records accepted past the threshold check and enqueued.
    #[inline]
    pub fn submitted_count(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    /// Records written to a sink.
    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Records evicted by drop-oldest overflow.
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Sink write or flush failures survived under the `Continue` policy.
    #[inline]
    pub fn write_failure_count(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Drop rate as a percentage of all accepted records, 0.0 when idle.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let submitted = self.submitted_count() as f64;
        if submitted == 0.0 {
            0.0
        } else {
            (dropped / submitted) * 100.0
        }
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current counter values.
    fn clone(&self) -> Self {
        Self {
            submitted: AtomicU64::new(self.submitted_count()),
            delivered: AtomicU64::new(self.delivered_count()),
            dropped: AtomicU64::new(self.dropped_count()),
            write_failures: AtomicU64::new(self.write_failure_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.submitted_count(), 0);
        assert_eq!(metrics.delivered_count(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.write_failure_count(), 0);
    }

    #[test]
    fn test_record_and_read() {
        let metrics = LoggerMetrics::new();
        metrics.record_submitted();
        metrics.record_submitted();
        metrics.record_delivered();
        metrics.record_dropped();
        assert_eq!(metrics.submitted_count(), 2);
        assert_eq!(metrics.delivered_count(), 1);
        assert_eq!(metrics.dropped_count(), 1);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);
        for _ in 0..90 {
            metrics.record_submitted();
        }
        for _ in 0..10 {
            metrics.record_submitted();
            metrics.record_dropped();
        }
        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "drop rate was {}", rate);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_dropped();
        let snapshot = metrics.clone();
        metrics.record_dropped();
        assert_eq!(snapshot.dropped_count(), 1);
        assert_eq!(metrics.dropped_count(), 2);
    }
}
