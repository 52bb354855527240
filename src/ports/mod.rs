//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Single-record persistence for session continuity
//! - `CompletionHandoff` - Receives the finalized north-star document

mod completion_handoff;
mod key_value_store;

pub use completion_handoff::{CompletionHandoff, HandoffError};
pub use key_value_store::{KeyValueStore, StorageError};
