//! # Session Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Key the hint is stored under.
pub const DEFAULT_HINT_KEY: &str = "user_authenticated";

/// Session store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key of the durable hint.
    pub hint_key: String,

    /// File holding the hint. `None` keeps it in memory only.
    pub hint_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hint_key: DEFAULT_HINT_KEY.to_string(),
            hint_path: None,
        }
    }
}

impl SessionConfig {
    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self::default()
    }
}
