//! # duolog
//!
//! An in-process, asynchronous logging core with two output pipelines.
//!
//! Callers submit severity-tagged sequences of heterogeneous values; the
//! core joins them into punctuation-correct prose, tags each line with the
//! level (and optionally a UTC timestamp), and delivers the result to one of
//! two sinks on a background thread per destination.
//!
//! ## Features
//!
//! - **Non-blocking producers**: `submit` never performs I/O on the caller
//!   thread; a saturated queue drops its oldest record rather than block
//! - **Ordered delivery**: FIFO per destination, batched and flushed on size
//!   or time triggers
//! - **Prose-aware formatting**: token spacing and whitespace/punctuation
//!   sanitation turn mixed values into readable lines
//! - **Lossless shutdown**: both queues drain fully before shutdown returns
//!
//! ```
//! use duolog::{log, LogLevel, Logger};
//!
//! let mut logger = Logger::to_console();
//! logger.set_timestamps(true);
//! log!(logger, LogLevel::Info, "Transmission completed,", "(", 0.0, "sec", ")");
//! logger.shutdown().unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Config, Destination, LogEntry, LogLevel, LogValue, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, WriteErrorPolicy,
    };
    pub use crate::sinks::SharedSink;
}

pub use crate::core::{
    Config, Destination, LogEntry, LogLevel, LogValue, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, WriteErrorPolicy, DEFAULT_BATCH_SIZE, DEFAULT_CAPACITY,
    DEFAULT_FLUSH_INTERVAL,
};
pub use crate::sinks::SharedSink;
