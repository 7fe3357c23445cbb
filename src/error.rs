//! Error types for restwrap
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for restwrap
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("Cannot marshal request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("Cannot perform request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Cannot read response body: {0}")]
    Read(#[source] reqwest::Error),

    // ============================================================================
    // Response Decoding Errors
    // ============================================================================
    #[error("Cannot parse response body: {0}")]
    JsonParse(#[source] serde_json::Error),
}

impl Error {
    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for restwrap
pub type Result<T> = std::result::Result<T, Error>;
