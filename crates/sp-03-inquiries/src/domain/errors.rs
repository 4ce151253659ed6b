//! # Inquiry Errors

use portal_gateway::GatewayError;
use thiserror::Error;

/// Shown when the list fetch failed.
pub const LIST_FAILED_MSG: &str = "שגיאה בטעינת רשימת הפניות";

/// Shown when the detail fetch failed.
pub const DETAIL_FAILED_MSG: &str = "שגיאה בטעינת פרטי הפנייה";

/// Shown when creation failed without a server message.
pub const CREATE_FAILED_MSG: &str = "שגיאה ביצירת הפנייה";

/// Inquiry store error types.
#[derive(Debug, Error)]
pub enum InquiryError {
    /// Backend call failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Upload succeeded but the server refused to link the file.
    #[error("Attachment rejected: {0}")]
    AttachRejected(String),
}
