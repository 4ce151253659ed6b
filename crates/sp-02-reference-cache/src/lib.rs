//! # SP-02 Reference Cache
//!
//! Slowly-changing lookup collections used to label and validate inquiries:
//! activity domains, inquiry topics, supplier roles, contact-person roles,
//! inquiry statuses and inquiry contexts.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Loading
//!
//! | Action | Path | On failure |
//! |--------|------|------------|
//! | `initialize()` | snapshot, else gateway | error set, data kept |
//! | `refresh()` | gateway | error set, data kept |
//!
//! The dataset is stale once `now - last_fetched >= cache_ttl_ms`.
//!
//! ## Module Structure
//!
//! ```text
//! sp-02-reference-cache/
//! ├── domain/          # ReferenceDataset, TTL rule, errors
//! ├── ports/           # ReferenceCacheApi (inbound), SnapshotSource (outbound)
//! ├── adapters/        # HttpSnapshotSource, FileSnapshotSource
//! ├── application/     # ReferenceCacheService
//! └── config.rs        # ReferenceCacheConfig
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{FileSnapshotSource, HttpSnapshotSource, SNAPSHOT_PATH};
pub use application::ReferenceCacheService;
pub use config::ReferenceCacheConfig;
pub use domain::{
    LoadSource, ReferenceDataset, ReferenceError, SnapshotError, CACHE_TTL_MS, INIT_FAILED_MSG,
    REFRESH_FAILED_MSG,
};
pub use ports::{NoSnapshot, ReferenceCacheApi, SnapshotSource, StaticSnapshot};
