//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the session's document is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which key-value store backs the session
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding record files (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Fixed key the document is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.key"));
        }
        if self.key.contains('/') || self.key.contains('\\') {
            return Err(ValidationError::InvalidStorageKey);
        }
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_key() -> String {
    "northStarData".to_string()
}
