//! Error types for dictionary processing
//!
//! Only configuration and setup mistakes are errors. Problems found in the
//! dictionary data itself are reported as [`Diagnostic`](crate::Diagnostic)s
//! and never abort a run.

use serde::Serialize;
use thiserror::Error;

/// How a reported problem affects the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The run cannot continue
    Fatal,
    /// The problem is recorded and processing continues with the next line
    Recoverable,
}

/// Error type for dictionary operations
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown phoneme capitalization convention
    #[error("Unsupported capitalization value: {0}")]
    UnsupportedCapitalization(String),

    /// Unknown sort mode
    #[error("Unsupported sort mode: {0}")]
    UnsupportedSortMode(String),

    /// Unknown check name in a warnings list
    #[error("Invalid warning: {0}")]
    InvalidCheck(String),

    /// Unknown accent name
    #[error("Unsupported accent: {0}")]
    UnsupportedAccent(String),

    /// Unknown dictionary dialect name
    #[error("Unsupported dictionary format: {0}")]
    UnsupportedDialect(String),

    /// A context value that the dialect's context grammar rejects
    #[error("Unknown {dialect} context value: {value}")]
    InvalidContext {
        /// Dialect whose context grammar rejected the value
        dialect: &'static str,
        /// The rejected value
        value: String,
    },

    /// Operation not available for this phoneme set
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// Malformed phoneme table
    #[error("Invalid phoneme table: {0}")]
    PhonemeTable(String),

    /// CSV decoding error while reading a phoneme table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Severity of this error when it surfaces during a run
    ///
    /// Context values are data problems: the validator turns them into
    /// `context-values` diagnostics. Everything else aborts.
    pub fn severity(&self) -> Severity {
        match self {
            Error::InvalidContext { .. } => Severity::Recoverable,
            _ => Severity::Fatal,
        }
    }
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::InvalidCheck("bogus".to_string());
        assert_eq!(error.to_string(), "Invalid warning: bogus");

        let error = Error::InvalidContext {
            dialect: "festlex",
            value: "adj".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown festlex context value: adj");
    }

    #[test]
    fn test_severity() {
        let context = Error::InvalidContext {
            dialect: "cmudict",
            value: "x".to_string(),
        };
        assert_eq!(context.severity(), Severity::Recoverable);
        assert_eq!(
            Error::NotSupported("parse".to_string()).severity(),
            Severity::Fatal
        );
        assert_eq!(
            Error::UnsupportedSortMode("random".to_string()).severity(),
            Severity::Fatal
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("missing"));
    }
}
