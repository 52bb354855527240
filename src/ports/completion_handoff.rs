//! Completion Handoff Port - Where a finalized document goes.
//!
//! Finalizing the canvas passes the completed document to whatever
//! consumes it next (a host application callback, an export, a log).

use async_trait::async_trait;

use crate::domain::north_star::NorthStarDocument;

/// Errors that can occur while handing off a finished document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    #[error("Handoff rejected: {0}")]
    Rejected(String),
}

/// Port receiving the completed north-star document
#[async_trait]
pub trait CompletionHandoff: Send + Sync {
    /// Receive the finalized document
    ///
    /// # Errors
    /// Returns `HandoffError` if the consumer refuses the document
    async fn hand_off(&self, document: NorthStarDocument) -> Result<(), HandoffError>;
}
