//! CanvasView - read-only projection of gate state and document progress.
//!
//! Navigating back to an earlier stage for review is just reading this
//! projection; it never changes the gate.

use serde::Serialize;

use crate::domain::north_star::NorthStarDocument;

use super::{CanvasStage, CanvasState};

/// How a stage should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// The stage currently being worked on.
    Active,
    /// Passed and its predicate holds.
    Complete,
    /// Reached but its predicate does not hold.
    Open,
    /// Not reached yet.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub stage: CanvasStage,
    pub status: StageStatus,
    pub editable: bool,
    pub complete: bool,
}

/// Snapshot of the whole canvas for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasView {
    pub state: CanvasState,
    pub stages: Vec<StageView>,
    /// All three predicates hold and the gate is in `Stage3Active`.
    pub can_finalize: bool,
    pub percent_complete: u8,
}

impl CanvasView {
    pub fn project(state: CanvasState, doc: &NorthStarDocument) -> Self {
        let progress = doc.progress();
        let active = state.active_stage();

        let stages = CanvasStage::all()
            .iter()
            .map(|stage| {
                let complete = stage.is_complete(&progress);
                let reached = match active {
                    Some(current) => *stage <= current,
                    None => true,
                };
                let status = if active == Some(*stage) {
                    StageStatus::Active
                } else if complete && reached {
                    StageStatus::Complete
                } else if reached {
                    StageStatus::Open
                } else {
                    StageStatus::Locked
                };
                StageView {
                    stage: *stage,
                    status,
                    editable: state.is_editable(*stage),
                    complete,
                }
            })
            .collect();

        Self {
            state,
            stages,
            can_finalize: state == CanvasState::Stage3Active && progress.is_all_complete(),
            percent_complete: progress.percent_complete(),
        }
    }

    /// The view of one stage.
    pub fn stage(&self, stage: CanvasStage) -> Option<&StageView> {
        self.stages.iter().find(|v| v.stage == stage)
    }
}
