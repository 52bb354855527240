//! File-based Key-Value Store Adapter
//!
//! Stores each key as `<data_dir>/<key>.json`. Writes go to a temporary
//! sibling file first and are then renamed over the target, so a reader
//! never sees a half-written record.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueStore, StorageError};

/// File-based storage for single records keyed by name
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a data directory
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the record file path for a key
    fn record_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// Ensure the data directory exists
    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

/// Rejects keys that would escape the data directory.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.trim().is_empty() {
        return Err(StorageError::invalid_key(key, "must not be empty"));
    }
    if key.contains('/') || key.contains('\\') || key == "." || key == ".." {
        return Err(StorageError::invalid_key(
            key,
            "must not contain path separators",
        ));
    }
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let file_path = self.record_path(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let file_path = self.record_path(key)?;
        self.ensure_dir().await?;

        let tmp_path = self.base_path.join(format!(".{}.json.tmp", key));
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(())
    }
}
