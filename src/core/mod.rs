//! Core logger types

pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod sanitize;
pub mod timestamp;
pub mod value;
pub mod worker;

pub use config::Config;
pub use entry::{Destination, LogEntry};
pub use error::{LoggerError, Result};
pub use level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use queue::{EntryQueue, DEFAULT_CAPACITY};
pub use value::LogValue;
pub use worker::{WriteErrorPolicy, DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL};
