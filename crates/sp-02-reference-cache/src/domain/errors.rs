//! # Reference Cache Errors

use portal_gateway::GatewayError;
use thiserror::Error;

/// Shown when `initialize()` could not load any dataset.
pub const INIT_FAILED_MSG: &str = "שגיאה בטעינת נתוני הפניה";

/// Shown when `refresh()` failed.
pub const REFRESH_FAILED_MSG: &str = "שגיאה בעדכון נתוני הפניה";

/// Failure reading the static snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The resource could not be fetched.
    #[error("Snapshot transport failed: {0}")]
    Transport(String),

    /// The resource could not be read from disk.
    #[error("Snapshot read failed: {0}")]
    Io(String),

    /// The resource was not a reference bundle.
    #[error("Snapshot is not valid reference data: {0}")]
    Parse(String),

    /// Snapshot location is unusable.
    #[error("Invalid snapshot location: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SnapshotError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Reference store error types.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Live load failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Snapshot load failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
