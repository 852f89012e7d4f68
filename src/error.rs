//! Custom error types for the crate.
//!
//! `SynthError` is the single error surface of the library. A transient
//! unparseable or empty response during a frequency query is absorbed by the
//! session's retry loop and never appears here; only an exhausted retry
//! budget surfaces, as [`SynthError::QueryFailed`]. Transport-level failures
//! (port busy, device unplugged, write errors) are never retried and
//! propagate immediately.

use thiserror::Error;

/// Convenience alias for results using the crate error type.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Errors produced by the library.
#[derive(Error, Debug)]
pub enum SynthError {
    /// Configuration file could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A frequency query exhausted its retry budget without a valid
    /// numeric response.
    #[error("Frequency query failed after {attempts} attempts")]
    QueryFailed {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// An operation was invoked after the session was closed.
    #[error("Session is closed")]
    SessionClosed,

    /// Serial port open/configuration failure.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Read/write failure on the underlying connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_failed_names_attempt_count() {
        let err = SynthError::QueryFailed { attempts: 3 };
        assert_eq!(err.to_string(), "Frequency query failed after 3 attempts");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "unplugged");
        let err: SynthError = io.into();
        assert!(matches!(err, SynthError::Io(_)));
    }
}
