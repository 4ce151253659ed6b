//! File-backed session hint.
//!
//! The file holds a small JSON object so several keys can share it:
//!
//! ```json
//! { "user_authenticated": true }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::SessionError;
use crate::ports::SessionHintStore;

/// Hint stored under a key in a JSON file.
#[derive(Debug, Clone)]
pub struct FileHintStore {
    path: PathBuf,
    key: String,
}

impl FileHintStore {
    /// Store at `path` under `key`.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Build from config, if a hint path is configured.
    pub fn from_config(config: &SessionConfig) -> Option<Self> {
        config
            .hint_path
            .as_ref()
            .map(|path| Self::new(path.clone(), config.hint_key.clone()))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Value>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, Value>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        debug!(path = %self.path.display(), "Session hint file written");
        Ok(())
    }
}

impl SessionHintStore for FileHintStore {
    fn load(&self) -> Result<bool, SessionError> {
        let entries = self.read_entries()?;
        Ok(match entries.get(&self.key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text == "true",
            _ => false,
        })
    }

    fn persist(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), Value::Bool(true));
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
