//! # Outbound Ports
//!
//! The static snapshot the cache prefers over a live fetch.

use async_trait::async_trait;
use shared_types::ReferenceData;

use crate::domain::SnapshotError;

/// Static reference snapshot - outbound port.
///
/// `Ok(None)` means the resource does not exist. The cache falls back to
/// the gateway on `Ok(None)` and on `Err` alike.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Read the snapshot.
    async fn load(&self) -> Result<Option<ReferenceData>, SnapshotError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// In-memory snapshot for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshot {
    data: Option<ReferenceData>,
}

impl StaticSnapshot {
    /// Snapshot that always yields `data`.
    pub fn new(data: ReferenceData) -> Self {
        Self { data: Some(data) }
    }

    /// Snapshot whose resource is absent.
    pub fn absent() -> Self {
        Self { data: None }
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshot {
    async fn load(&self) -> Result<Option<ReferenceData>, SnapshotError> {
        Ok(self.data.clone())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// No snapshot configured; every load goes to the gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSnapshot;

#[async_trait]
impl SnapshotSource for NoSnapshot {
    async fn load(&self) -> Result<Option<ReferenceData>, SnapshotError> {
        Ok(None)
    }

    fn location(&self) -> String {
        "none".to_string()
    }
}
