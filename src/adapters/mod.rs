//! Adapters - Implementations of ports for external systems.
//!
//! - `storage` - Key-value stores backing session continuity
//! - `catalog` - YAML reference catalog loading
//! - `handoff` - Receivers for the finalized document

pub mod catalog;
pub mod handoff;
pub mod storage;

pub use catalog::{builtin_catalog, load_catalog};
pub use handoff::{RecordingHandoff, TracingHandoff};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
