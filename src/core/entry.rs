//! Log entry and destination types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two logical output pipelines.
///
/// Each destination has its own queue and delivery worker; ordering is
/// guaranteed within a destination, never across the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Informational pipeline, typically bound to stdout.
    Standard,
    /// Error pipeline, typically bound to stderr.
    Error,
}

impl Destination {
    pub fn to_str(&self) -> &'static str {
        match self {
            Destination::Standard => "standard",
            Destination::Error => "error",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// One fully formatted, newline-terminated record.
///
/// Immutable once built; owned by exactly one queue, then by one worker
/// batch, then discarded after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub destination: Destination,
    pub text: String,
}

impl LogEntry {
    pub fn new(destination: Destination, text: String) -> Self {
        Self { destination, text }
    }
}
