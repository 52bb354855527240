//! Key-Value Store Port - Interface for the single-record persistence slot.
//!
//! Session continuity keeps exactly one serialized document under a fixed
//! key. Anything that can get and put a string by key can back it: a file
//! directory, process memory, or a browser-style local storage.

use async_trait::async_trait;

/// Errors that can occur during key-value store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl StorageError {
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Port for reading and writing a string value under a key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` when nothing has been stored under the key yet
    ///
    /// # Errors
    /// Returns `StorageError` if the backing store cannot be read
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails; the previous value is
    /// left in place
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_error_names_key_and_reason() {
        let err = StorageError::invalid_key("../etc", "must not contain path separators");
        let msg = err.to_string();
        assert!(msg.contains("../etc"));
        assert!(msg.contains("path separators"));
    }

    #[test]
    fn test_io_error_display() {
        let err = StorageError::Io("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
