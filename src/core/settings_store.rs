//! Persistence seam for plugin settings.
//!
//! The host owns where settings live. The crate only needs to read the raw
//! record and write a normalized one back.

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use crate::errors::TldrError;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the persisted record, or `None` if nothing was saved yet.
    async fn load_data(&self) -> Result<Option<Value>, TldrError>;

    async fn save_data(&self, data: &Value) -> Result<(), TldrError>;
}

/// Stores settings as a pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn load_data(&self) -> Result<Option<Value>, TldrError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            TldrError::SettingsError(format!(
                "Invalid JSON in {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn save_data(&self, data: &Value) -> Result<(), TldrError> {
        let body = serde_json::to_string_pretty(data)
            .map_err(|e| TldrError::SettingsError(format!("Failed to encode settings: {e}")))?;
        tokio::fs::write(&self.path, body).await?;
        debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}
