//! # Inquiry Store Slices
//!
//! The store keeps four independent slices. Each is replaced only by the
//! action that owns it.

use shared_types::{InquiryPage, InquiryQuery, InquiryStats, SupplierInquiry, Timestamp};

/// Stats time-to-live (5 minutes).
pub const STATS_TTL_MS: u64 = 5 * 60 * 1000;

/// Page size before the first response.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// How many items `recent_inquiries()` returns.
pub const RECENT_LIMIT: usize = 5;

/// Document type attachments are uploaded against.
pub const INQUIRY_DOCTYPE: &str = "Supplier Inquiry";

/// List position. `page >= 1`, `page_size > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    /// First page, nothing known yet.
    pub fn first(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
            total_pages: 0,
        }
    }

    /// Position reported by a response. Zero page or size keep the invariant.
    pub fn from_page(page: &InquiryPage, fallback_size: u32) -> Self {
        Self {
            page: page.page.max(1),
            page_size: if page.page_size == 0 {
                fallback_size.max(1)
            } else {
                page.page_size
            },
            total: page.total,
            total_pages: page.total_pages,
        }
    }

    /// Whether `page` is a page that exists.
    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Paginated list slice.
///
/// `items` always reflects the last completed fetch; a failed fetch leaves
/// it empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryListState {
    pub items: Vec<SupplierInquiry>,
    pub pagination: Pagination,
    /// Parameters of the last fetch, verbatim.
    pub filters: InquiryQuery,
    pub loading: bool,
    pub error: Option<String>,
}

impl InquiryListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: Pagination::first(page_size),
            ..Default::default()
        }
    }
}

/// Aggregate stats slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    pub stats: Option<InquiryStats>,
    pub loading: bool,
    pub last_fetched: Option<Timestamp>,
}

impl StatsState {
    /// Never fetched, or older than `ttl_ms`.
    pub fn is_stale(&self, now: Timestamp, ttl_ms: u64) -> bool {
        match self.last_fetched {
            Some(fetched) => now.saturating_sub(fetched) > ttl_ms,
            None => true,
        }
    }
}

/// Detail slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    pub current: Option<SupplierInquiry>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Create-form slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub loading: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_bounds() {
        let pagination = Pagination {
            page: 1,
            page_size: 20,
            total: 45,
            total_pages: 3,
        };
        assert!(!pagination.contains(0));
        assert!(pagination.contains(3));
        assert!(!pagination.contains(4));
        assert!(pagination.has_next());
        assert!(!Pagination::default().contains(1));
    }

    #[test]
    fn test_from_page_keeps_invariants() {
        let page = InquiryPage {
            page: 0,
            page_size: 0,
            ..Default::default()
        };
        let pagination = Pagination::from_page(&page, 20);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 20);
    }

    #[test]
    fn test_stats_staleness() {
        let mut stats = StatsState::default();
        assert!(stats.is_stale(0, STATS_TTL_MS));

        stats.last_fetched = Some(1_000);
        assert!(!stats.is_stale(1_000 + STATS_TTL_MS, STATS_TTL_MS));
        assert!(stats.is_stale(1_001 + STATS_TTL_MS, STATS_TTL_MS));
    }
}
