//! # Reference Cache Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::CACHE_TTL_MS;

/// Reference cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCacheConfig {
    /// Dataset time-to-live in milliseconds.
    pub cache_ttl_ms: u64,

    /// Absolute URL of the static snapshot. `None` uses the portal origin.
    pub snapshot_url: Option<String>,

    /// Snapshot file on disk, used instead of HTTP when set.
    pub snapshot_path: Option<PathBuf>,

    /// Snapshot fetch timeout in seconds.
    pub snapshot_timeout_secs: u64,
}

impl Default for ReferenceCacheConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: CACHE_TTL_MS,
            snapshot_url: None,
            snapshot_path: None,
            snapshot_timeout_secs: 10,
        }
    }
}

impl ReferenceCacheConfig {
    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self {
            snapshot_timeout_secs: 1,
            ..Default::default()
        }
    }
}
