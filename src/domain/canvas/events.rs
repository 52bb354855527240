//! Canvas domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CanvasSessionId, Timestamp};

use super::CanvasState;

/// Events recorded by the canvas aggregate.
///
/// Every successful edit records one event and every gate move records one
/// `StageAdvanced`. Finalizing records its `StageAdvanced` followed by
/// `Finalized`. Failed operations record none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// The vision text was replaced.
    VisionUpdated {
        session_id: CanvasSessionId,
        occurred_at: Timestamp,
    },

    /// The mission text was replaced.
    MissionUpdated {
        session_id: CanvasSessionId,
        occurred_at: Timestamp,
    },

    /// A core value was appended.
    ValueAdded {
        session_id: CanvasSessionId,
        name: String,
        occurred_at: Timestamp,
    },

    /// A guideline was appended at `index`.
    GuidelineAdded {
        session_id: CanvasSessionId,
        index: usize,
        occurred_at: Timestamp,
    },

    /// The stage gate moved forward.
    StageAdvanced {
        session_id: CanvasSessionId,
        from: CanvasState,
        to: CanvasState,
        occurred_at: Timestamp,
    },

    /// The canvas was finalized and the document handed off.
    Finalized {
        session_id: CanvasSessionId,
        occurred_at: Timestamp,
    },
}

impl CanvasEvent {
    /// Short routing name, used in log lines.
    pub fn event_type(&self) -> &'static str {
        match self {
            CanvasEvent::VisionUpdated { .. } => "canvas.vision_updated",
            CanvasEvent::MissionUpdated { .. } => "canvas.mission_updated",
            CanvasEvent::ValueAdded { .. } => "canvas.value_added",
            CanvasEvent::GuidelineAdded { .. } => "canvas.guideline_added",
            CanvasEvent::StageAdvanced { .. } => "canvas.stage_advanced",
            CanvasEvent::Finalized { .. } => "canvas.finalized",
        }
    }

    /// True for gate transitions, as opposed to document edits or the
    /// completion notice.
    pub fn is_transition(&self) -> bool {
        matches!(self, CanvasEvent::StageAdvanced { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_are_namespaced() {
        let event = CanvasEvent::ValueAdded {
            session_id: CanvasSessionId::new(),
            name: "诚信".into(),
            occurred_at: Timestamp::now(),
        };
        assert_eq!(event.event_type(), "canvas.value_added");
        assert!(!event.is_transition());
    }

    #[test]
    fn stage_advanced_is_a_transition() {
        let event = CanvasEvent::StageAdvanced {
            session_id: CanvasSessionId::new(),
            from: CanvasState::Stage1Active,
            to: CanvasState::Stage2Active,
            occurred_at: Timestamp::now(),
        };
        assert!(event.is_transition());
    }

    #[test]
    fn finalized_is_not_a_transition() {
        let event = CanvasEvent::Finalized {
            session_id: CanvasSessionId::new(),
            occurred_at: Timestamp::now(),
        };
        assert_eq!(event.event_type(), "canvas.finalized");
        assert!(!event.is_transition());
    }
}
