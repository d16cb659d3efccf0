//! Record formatter
//!
//! Turns a value sequence into one ready-to-write record string: tokens are
//! converted to text, joined under the token-spacing rule, split on embedded
//! line breaks, sanitized per line, then tagged with the level and an
//! optional timestamp. The formatter performs no I/O.

use std::fmt::Write as _;

use super::level::LogLevel;
use super::sanitize::{needs_space, sanitize};
use super::timestamp;
use super::value::LogValue;

/// Line terminator used for records.
pub const LINE_TERMINATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Render a complete record.
///
/// Each physical line is independently tagged; a multi-line message shares a
/// single timestamp across its lines. Lines that sanitize to nothing are
/// skipped, but a call whose tokens produce no visible text still yields one
/// empty-body record so every log call is accounted for in the output.
pub fn render(level: LogLevel, timestamps: bool, values: &[LogValue]) -> String {
    let joined = join_values(values);
    let stamp = timestamps.then(timestamp::utc_stamp);

    let mut record = String::new();
    let mut emitted = 0usize;
    for line in joined.split('\n') {
        let clean = sanitize(line);
        if clean.is_empty() {
            continue;
        }
        push_line(&mut record, level, stamp.as_deref(), &clean);
        emitted += 1;
    }
    if emitted == 0 {
        push_line(&mut record, level, stamp.as_deref(), "");
    }
    record
}

fn push_line(record: &mut String, level: LogLevel, stamp: Option<&str>, text: &str) {
    if let Some(stamp) = stamp {
        record.push_str(stamp);
        record.push('\t');
    }
    let _ = write!(record, "[{:<5}] ", level.to_str());
    record.push_str(text);
    record.push_str(LINE_TERMINATOR);
}

/// Concatenate token texts, inserting spaces per the token-spacing rule.
///
/// The rule looks at the previous token as written by the caller, not at the
/// accumulated output, so an explicit trailing space in a token suppresses
/// the automatic separator.
fn join_values(values: &[LogValue]) -> String {
    let mut joined = String::new();
    let mut prev = String::new();
    for value in values {
        let text = value.to_text();
        if needs_space(&prev, &text) {
            joined.push(' ');
        }
        joined.push_str(&text);
        prev = text;
    }
    joined
}
