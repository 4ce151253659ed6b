//! Snapshot fetched over plain HTTP, without credentials.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use shared_types::ReferenceData;
use tracing::debug;

use crate::domain::SnapshotError;
use crate::ports::SnapshotSource;

/// Path of the snapshot relative to the portal origin.
pub const SNAPSHOT_PATH: &str = "/data/reference-data.json";

/// GETs the reference bundle. Any non-success status is `Ok(None)`.
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: Client,
    url: Url,
}

impl HttpSnapshotSource {
    /// Snapshot at an absolute URL.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SnapshotError> {
        let url = Url::parse(url)
            .map_err(|e| SnapshotError::Config(format!("invalid snapshot url '{url}': {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SnapshotError::Config(e.to_string()))?;
        Ok(Self { client, url })
    }

    /// Snapshot at [`SNAPSHOT_PATH`] under `origin`.
    pub fn at_origin(origin: &str, timeout: Duration) -> Result<Self, SnapshotError> {
        let url = format!("{}{}", origin.trim_end_matches('/'), SNAPSHOT_PATH);
        Self::new(&url, timeout)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn load(&self) -> Result<Option<ReferenceData>, SnapshotError> {
        let response = self.client.get(self.url.clone()).send().await?;
        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), url = %self.url, "Snapshot not available");
            return Ok(None);
        }
        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}
