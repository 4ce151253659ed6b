//! # Inquiry Store Configuration

use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_PAGE_SIZE, RECENT_LIMIT, STATS_TTL_MS};

/// Inquiry store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryConfig {
    /// Stats time-to-live in milliseconds.
    pub stats_ttl_ms: u64,

    /// Page size used until a response reports one.
    pub default_page_size: u32,

    /// Items returned by `recent_inquiries()`.
    pub recent_limit: usize,
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            stats_ttl_ms: STATS_TTL_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
            recent_limit: RECENT_LIMIT,
        }
    }
}

impl InquiryConfig {
    /// Create a config for testing (small pages).
    pub fn for_testing() -> Self {
        Self {
            default_page_size: 5,
            ..Default::default()
        }
    }
}
