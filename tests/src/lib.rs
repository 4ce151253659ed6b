//! # Supplier Portal Test Suite
//!
//! Cross-store scenarios that need more than one crate wired together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs         # Harness around PortalContainer<MockGateway>
//!     ├── session_flows.rs    # Session restore, login, logout
//!     ├── reference_flows.rs  # Snapshot vs. live load, TTL
//!     ├── inquiry_flows.rs    # Listing, paging, submit, attach
//!     └── http_e2e.rs         # Full container against a stub backend
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sp-tests
//! cargo test -p sp-tests integration::http_e2e
//! ```

pub mod integration;
