//! Variadic logging macros
//!
//! A log call is a sequence of heterogeneous tokens, not a format string;
//! these macros capture each argument through [`LogValue::from`] and hand the
//! sequence to the logger.
//!
//! # Examples
//!
//! ```
//! use duolog::{log, log_err, LogLevel, Logger};
//!
//! let mut logger = Logger::new(std::io::stdout(), std::io::stderr());
//!
//! log!(logger, LogLevel::Info, "Transmission completed,", "(", 0.0, "sec", ")");
//! log!(logger, LogLevel::Warn, "retry", 3, "of", 5);
//! log_err!(logger, LogLevel::Info, "diagnostics routed to stderr");
//! # logger.shutdown().unwrap();
//! ```
//!
//! [`LogValue::from`]: crate::LogValue

/// Submit a message routed by severity.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.submit($level, &[$($crate::LogValue::from($value)),+])
    };
}

/// Submit a message to the standard pipeline regardless of level.
#[macro_export]
macro_rules! log_out {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.log_out($level, &[$($crate::LogValue::from($value)),+])
    };
}

/// Submit a message to the error pipeline regardless of level.
#[macro_export]
macro_rules! log_err {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.log_err($level, &[$($crate::LogValue::from($value)),+])
    };
}
