//! Error types for the Tunestats client.

use thiserror::Error;
use tunestats_types::ConfigError;

/// Errors that can occur when talking to the stats backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: DNS, refused connection, TLS, timeout.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend rejected the session token (401). The stored token is
    /// already cleared when this is returned.
    #[error("Session expired or invalid, sign in again")]
    Unauthorized,

    /// Backend returned any other non-success status.
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No session token is stored.
    #[error("Not signed in")]
    NotSignedIn,

    /// Reading or writing persisted settings failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Whether the caller should send the user back through sign-in.
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::NotSignedIn)
    }
}
