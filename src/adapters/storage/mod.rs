//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for persisting the session's
//! north-star document.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores each record as a JSON file on disk
//! - **InMemoryKeyValueStore** - Stores records in memory (testing/ephemeral sessions)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
