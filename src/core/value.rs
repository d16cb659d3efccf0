//! Loggable value sum type
//!
//! A log call takes an ordered sequence of [`LogValue`] tokens; each variant
//! has exactly one textual conversion, applied by the formatter before the
//! token-spacing join.

use std::fmt;

/// A single message token.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl LogValue {
    /// Textual form used by the formatter.
    ///
    /// Integral floats keep one decimal digit so `0.0` does not collapse to
    /// `0` in prose.
    pub fn to_text(&self) -> String {
        match self {
            LogValue::Str(s) => s.clone(),
            LogValue::Int(i) => i.to_string(),
            LogValue::UInt(u) => u.to_string(),
            LogValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.1}")
                } else {
                    f.to_string()
                }
            }
            LogValue::Bool(b) => b.to_string(),
            LogValue::Char(c) => c.to_string(),
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl From<&str> for LogValue {
    fn from(v: &str) -> Self {
        LogValue::Str(v.to_string())
    }
}

impl From<String> for LogValue {
    fn from(v: String) -> Self {
        LogValue::Str(v)
    }
}

impl From<&String> for LogValue {
    fn from(v: &String) -> Self {
        LogValue::Str(v.clone())
    }
}

impl From<bool> for LogValue {
    fn from(v: bool) -> Self {
        LogValue::Bool(v)
    }
}

impl From<char> for LogValue {
    fn from(v: char) -> Self {
        LogValue::Char(v)
    }
}

impl From<f32> for LogValue {
    fn from(v: f32) -> Self {
        LogValue::Float(f64::from(v))
    }
}

impl From<f64> for LogValue {
    fn from(v: f64) -> Self {
        LogValue::Float(v)
    }
}

macro_rules! from_signed {
    ($($t:ty),+) => {$(
        impl From<$t> for LogValue {
            fn from(v: $t) -> Self {
                LogValue::Int(v as i64)
            }
        }
    )+};
}

macro_rules! from_unsigned {
    ($($t:ty),+) => {$(
        impl From<$t> for LogValue {
            fn from(v: $t) -> Self {
                LogValue::UInt(v as u64)
            }
        }
    )+};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_float_keeps_decimal() {
        assert_eq!(LogValue::from(0.0).to_text(), "0.0");
        assert_eq!(LogValue::from(100.0).to_text(), "100.0");
        assert_eq!(LogValue::from(-7.0).to_text(), "-7.0");
    }

    #[test]
    fn test_fractional_float_unchanged() {
        assert_eq!(LogValue::from(100.01).to_text(), "100.01");
        assert_eq!(LogValue::from(3.1415).to_text(), "3.1415");
        assert_eq!(LogValue::from(-7.25).to_text(), "-7.25");
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(LogValue::from(42i32).to_text(), "42");
        assert_eq!(LogValue::from(-1i64).to_text(), "-1");
        assert_eq!(LogValue::from(7usize).to_text(), "7");
    }

    #[test]
    fn test_other_variants() {
        assert_eq!(LogValue::from("Foo").to_text(), "Foo");
        assert_eq!(LogValue::from(true).to_text(), "true");
        assert_eq!(LogValue::from('x').to_text(), "x");
    }

    #[test]
    fn test_display_matches_to_text() {
        let v = LogValue::from(0.0);
        assert_eq!(v.to_string(), v.to_text());
    }
}
