//! # SP-03 Inquiries
//!
//! Supplier inquiries: a paginated, filterable list, a separately cached
//! stats view, a detail view and the create/attach flows.
//!
//! **Subsystem ID:** 3
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Slices
//!
//! | Slice | Filled by | On failure |
//! |-------|-----------|------------|
//! | stats | `fetch_stats` (5 min TTL) | logged, previous kept |
//! | list | `fetch_inquiries`, `load_next_page`, `go_to_page` | items emptied, error set |
//! | detail | `fetch_inquiry` | current cleared, error set |
//! | form | `submit_inquiry` | server message or default error |
//!
//! A successful create refreshes stats only; callers re-fetch the list
//! themselves.
//!
//! ## Module Structure
//!
//! ```text
//! sp-03-inquiries/
//! ├── domain/          # Pagination, slice states, errors
//! ├── ports/           # InquiryApi (inbound)
//! ├── application/     # InquiryService
//! └── config.rs        # InquiryConfig
//! ```

#![warn(clippy::all)]

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::InquiryService;
pub use config::InquiryConfig;
pub use domain::{
    DetailState, FormState, InquiryError, InquiryListState, Pagination, StatsState,
    CREATE_FAILED_MSG, DEFAULT_PAGE_SIZE, DETAIL_FAILED_MSG, INQUIRY_DOCTYPE, LIST_FAILED_MSG,
    RECENT_LIMIT, STATS_TTL_MS,
};
pub use ports::InquiryApi;
