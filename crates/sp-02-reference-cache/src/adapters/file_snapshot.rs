//! Snapshot read from a JSON file on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared_types::ReferenceData;

use crate::domain::SnapshotError;
use crate::ports::SnapshotSource;

/// Reads the reference bundle from a file. A missing file is `Ok(None)`.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn load(&self) -> Result<Option<ReferenceData>, SnapshotError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
