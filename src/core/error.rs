//! Error types for the logging core
//!
//! `submit` itself never fails; errors surface only from the delivery side,
//! and only at shutdown for the default `Continue` write policy.

use super::entry::Destination;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A sink rejected a write or flush
    #[error("{destination} sink write failed: {source}")]
    SinkWrite {
        destination: Destination,
        #[source]
        source: std::io::Error,
    },

    /// A delivery worker panicked before finishing its drain
    #[error("{destination} delivery worker panicked")]
    WorkerPanicked { destination: Destination },
}

impl LoggerError {
    pub fn sink_write(destination: Destination, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            destination,
            source,
        }
    }
}
