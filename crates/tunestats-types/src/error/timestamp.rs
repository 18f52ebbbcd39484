//! Timestamp parsing errors.

use thiserror::Error;

/// A play timestamp that is not valid RFC 3339.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// Input could not be parsed
    #[error("Invalid timestamp {input:?}: {message}")]
    Invalid {
        /// The rejected input
        input: String,
        /// Parser message
        message: String,
    },
}

impl TimestampError {
    pub(crate) fn invalid(input: &str, e: &chrono::ParseError) -> Self {
        Self::Invalid { input: input.to_string(), message: e.to_string() }
    }
}
