//! UTC timestamp generation

use chrono::{DateTime, Utc};

/// Current UTC time as `YYYY-MM-DD HH:MM:SS.mmm UTC`.
pub fn utc_stamp() -> String {
    format_stamp(&Utc::now())
}

pub(crate) fn format_stamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}
