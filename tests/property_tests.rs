//! Property-based tests for the formatting and sanitation layer

use duolog::core::format;
use duolog::core::sanitize::{needs_space, sanitize};
use duolog::{LogLevel, LogValue};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

proptest! {
    /// Sanitation is idempotent for any input.
    #[test]
    fn test_sanitize_idempotent(s in ".*") {
        let once = sanitize(&s);
        prop_assert_eq!(sanitize(&once), once);
    }

    /// Sanitized output is trimmed and has no whitespace runs.
    #[test]
    fn test_sanitize_normal_form(s in ".*") {
        let clean = sanitize(&s);
        prop_assert_eq!(clean.trim(), clean.as_str());
        prop_assert!(!clean.contains("  "));
        prop_assert!(!clean.contains('\t'));
    }

    /// Sanitized output never keeps a space before sentence punctuation.
    #[test]
    fn test_sanitize_no_space_before_punctuation(s in ".*") {
        let clean = sanitize(&s);
        for punct in [',', '.', '!', '?', ':', ';', ')'] {
            let needle = format!(" {punct}");
            prop_assert!(!clean.contains(&needle));
        }
        prop_assert!(!clean.contains("( "));
    }

    /// A token ending in whitespace never gets an extra separator.
    #[test]
    fn test_no_space_after_trailing_whitespace(prev in ".*\\s", next in ".*") {
        prop_assume!(prev.chars().last().is_some_and(char::is_whitespace));
        prop_assert!(!needs_space(&prev, &next));
    }

    /// An empty previous token never forces a separator.
    #[test]
    fn test_no_space_after_empty_prev(next in ".*") {
        prop_assert!(!needs_space("", &next));
    }

    /// Level ordering matches the numeric representation.
    #[test]
    fn test_level_ordering_consistent(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    /// Level names roundtrip through parsing.
    #[test]
    fn test_level_parse_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Raw levels always map to a valid level; out-of-range means Fatal.
    #[test]
    fn test_from_raw_total(raw in any::<u8>()) {
        let level = LogLevel::from_raw(raw);
        if raw > LogLevel::Fatal as u8 {
            prop_assert_eq!(level, LogLevel::Fatal);
        } else {
            prop_assert_eq!(level as u8, raw);
        }
    }

    /// Integral floats always render with exactly one decimal digit.
    #[test]
    fn test_integral_float_rendering(i in -1_000_000i64..1_000_000) {
        let text = LogValue::from(i as f64).to_text();
        prop_assert_eq!(text, format!("{i}.0"));
    }

    /// Every render produces at least one line and one trailing terminator.
    #[test]
    fn test_render_always_one_visible_record(
        level in any_level(),
        tokens in proptest::collection::vec("[ -~]*", 0..6),
    ) {
        let values: Vec<LogValue> = tokens.iter().map(|t| LogValue::from(t.as_str())).collect();
        let record = format::render(level, false, &values);
        prop_assert!(record.ends_with(format::LINE_TERMINATOR));
        prop_assert!(record.lines().count() >= 1);
        let prefix = format!("[{:<5}] ", level.to_str());
        for line in record.lines() {
            prop_assert!(line.starts_with(&prefix));
        }
    }
}
