//! Completion Handoff Adapters
//!
//! - **TracingHandoff** - Logs a summary of the finished document
//! - **RecordingHandoff** - Keeps every handed-off document in memory (testing)

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::north_star::NorthStarDocument;
use crate::ports::{CompletionHandoff, HandoffError};

/// Emits the finished document as a structured log event
#[derive(Debug, Clone, Default)]
pub struct TracingHandoff;

impl TracingHandoff {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionHandoff for TracingHandoff {
    async fn hand_off(&self, document: NorthStarDocument) -> Result<(), HandoffError> {
        let values: Vec<&str> = document.value_names().collect();
        tracing::info!(
            vision = document.vision(),
            mission = document.mission(),
            values = ?values,
            guidelines = document.guidelines().len(),
            "North star document completed"
        );
        Ok(())
    }
}

/// In-memory handoff target that records what it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingHandoff {
    received: Arc<RwLock<Vec<NorthStarDocument>>>,
}

impl RecordingHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents handed off so far, oldest first
    pub async fn received(&self) -> Vec<NorthStarDocument> {
        self.received.read().await.clone()
    }
}

#[async_trait]
impl CompletionHandoff for RecordingHandoff {
    async fn hand_off(&self, document: NorthStarDocument) -> Result<(), HandoffError> {
        self.received.write().await.push(document);
        Ok(())
    }
}
