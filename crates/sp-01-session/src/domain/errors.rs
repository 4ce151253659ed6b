//! # Session Errors

use portal_gateway::GatewayError;
use thiserror::Error;

/// Shown when credentials were accepted but no user came back.
pub const LOGIN_NO_USER_MSG: &str = "אירעה שגיאה בהתחברות";

/// Shown when the credential exchange or user fetch failed.
pub const LOGIN_FAILED_MSG: &str = "שם משתמש או סיסמה שגויים";

/// Session store error types.
///
/// Never returned from store actions; they are logged or mapped to a
/// localized message.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Backend call failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Current-user payload carried no user.
    #[error("Current user payload has no user")]
    NoUser,

    /// Durable hint could not be read or written.
    #[error("Session hint storage failed: {0}")]
    HintStorage(String),
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        Self::HintStorage(e.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        Self::HintStorage(e.to_string())
    }
}
