//! # Gateway Errors
//!
//! Transport and authentication failures. Business rejections are not
//! errors: they arrive as `success: false` payloads.

use thiserror::Error;

/// Errors that can occur when talking to the portal backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Server unreachable.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request failed in flight (timeout, reset, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Session expired or credentials rejected (HTTP 401).
    #[error("Unauthorized: session expired or invalid credentials")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code.
        status: u16,
        /// Server exception text, or the status reason.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request could not be built from the configuration.
    #[error("Invalid gateway configuration: {0}")]
    Config(String),
}

impl GatewayError {
    /// Whether this failure means the session is gone.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Whether this failure happened before the server answered.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Transport(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            Self::Connection(e.to_string())
        } else if e.is_decode() {
            Self::Parse(e.to_string())
        } else if e.is_builder() {
            Self::Config(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
