//! In-Memory Key-Value Store Adapter
//!
//! Keeps records in process memory. Useful for testing and for sessions
//! that should not outlive the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, StorageError};

/// In-memory storage for keyed records
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    records: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<RwLock<usize>>,
}

impl InMemoryKeyValueStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one record
    pub fn with_record(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut records = HashMap::new();
        records.insert(key.into(), value.into());
        Self {
            records: Arc::new(RwLock::new(records)),
            writes: Arc::new(RwLock::new(0)),
        }
    }

    /// Number of successful `put` calls so far (useful for tests)
    pub async fn write_count(&self) -> usize {
        *self.writes.read().await
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.insert(key.to_string(), value.to_string());
        *self.writes.write().await += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_get_missing_returns_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("northStarData").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_put_and_get() {
        let store = InMemoryKeyValueStore::new();

        store.put("k", "v").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(store.write_count().await, 1);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_records() {
        let store = InMemoryKeyValueStore::new();
        let clone = store.clone();

        store.put("k", "v").await.unwrap();

        assert_eq!(clone.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_memory_store_with_record_is_not_a_write() {
        let store = InMemoryKeyValueStore::with_record("k", "seed");

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("seed"));
        assert_eq!(store.write_count().await, 0);
    }
}
