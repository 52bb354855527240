//! SessionContinuity - bridges the north-star document to durable storage.
//!
//! One record, one fixed key. Loading never fails the session: an absent,
//! unreadable or invalid record is reported and treated as "no saved
//! session". Saving skips fully empty documents so a blank first render
//! cannot clobber earlier work.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::north_star::NorthStarDocument;
use crate::ports::{KeyValueStore, StorageError};

/// What a call to `save` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document was written as mutation number `sequence`.
    Written { sequence: u64 },
    /// The document was empty and nothing was written.
    SkippedEmpty,
    /// A later save had already been written, so this one was dropped.
    SkippedStale { sequence: u64 },
}

/// Why a stored record could not be turned back into a document.
#[derive(Debug, thiserror::Error)]
enum DecodeError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("record violates document invariants: {0}")]
    Invalid(#[from] crate::domain::foundation::ValidationError),
}

/// Session-scoped persistence handle for the north-star document.
pub struct SessionContinuity {
    store: Arc<dyn KeyValueStore>,
    key: String,
    sequence: AtomicU64,
    last_written: Mutex<u64>,
}

impl SessionContinuity {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            sequence: AtomicU64::new(0),
            last_written: Mutex::new(0),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the saved document, if there is a usable one.
    pub async fn load(&self) -> Option<NorthStarDocument> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No saved north star document");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read saved document, starting fresh");
                return None;
            }
        };

        match decode(&raw) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding unreadable saved document, starting fresh");
                None
            }
        }
    }

    /// Writes `doc` under the fixed key unless it is fully empty.
    ///
    /// The call is sequenced when it is made, not when the returned future
    /// first runs. Writes are serialised, and a save whose sequence number is
    /// not newer than the last written one is skipped, so the stored record
    /// always reflects the latest intended state.
    pub fn save(
        &self,
        doc: &NorthStarDocument,
    ) -> impl Future<Output = Result<SaveOutcome, StorageError>> + '_ {
        let prepared = if doc.is_non_trivial() {
            let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            Some((sequence, serde_json::to_string(doc)))
        } else {
            None
        };

        async move {
            let Some((sequence, payload)) = prepared else {
                return Ok(SaveOutcome::SkippedEmpty);
            };
            let payload = payload.map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

            let mut last_written = self.last_written.lock().await;
            if sequence <= *last_written {
                tracing::debug!(sequence, last_written = *last_written, "Skipping stale save");
                return Ok(SaveOutcome::SkippedStale { sequence });
            }

            self.store.put(&self.key, &payload).await?;
            *last_written = sequence;
            Ok(SaveOutcome::Written { sequence })
        }
    }
}

fn decode(raw: &str) -> Result<NorthStarDocument, DecodeError> {
    let doc: NorthStarDocument = serde_json::from_str(raw)?;
    doc.validate()?;
    Ok(doc)
}
