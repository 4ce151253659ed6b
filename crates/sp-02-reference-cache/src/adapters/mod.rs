//! # Adapters
//!
//! Snapshot sources backed by HTTP and the filesystem.

pub mod file_snapshot;
pub mod http_snapshot;

pub use file_snapshot::FileSnapshotSource;
pub use http_snapshot::{HttpSnapshotSource, SNAPSHOT_PATH};
