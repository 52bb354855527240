//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifies one run of the canvas wizard.
///
/// Never persisted with the document; it only correlates events and log
/// lines emitted during a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanvasSessionId(Uuid);

impl CanvasSessionId {
    /// Creates a new random CanvasSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CanvasSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CanvasSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CanvasSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
