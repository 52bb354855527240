//! Stage gate - the state machine deciding which stage is editable.
//!
//! # Transitions
//!
//! | From           | Trigger                 | To             | Kind             |
//! |----------------|-------------------------|----------------|------------------|
//! | `Stage1Active` | `ConfirmVisionMission`  | `Stage2Active` | explicit confirm |
//! | `Stage2Active` | `ValueAppended`         | `Stage3Active` | automatic, once  |
//! | `Stage3Active` | `Finalize`              | `AllComplete`  | explicit confirm |
//!
//! Explicit triggers fired from the wrong state are errors. The automatic
//! trigger fired from any other state is simply ignored, which is what makes
//! it one-shot: once the gate has left `Stage2Active` there is no way back.
//! There are no backward transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::north_star::StageProgress;

use super::CanvasStage;

/// Gate state. Initial state is `Stage1Active`; `AllComplete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CanvasState {
    #[default]
    Stage1Active,
    Stage2Active,
    Stage3Active,
    AllComplete,
}

impl CanvasState {
    /// The stage currently being worked on, if any.
    pub fn active_stage(&self) -> Option<CanvasStage> {
        match self {
            CanvasState::Stage1Active => Some(CanvasStage::VisionMission),
            CanvasState::Stage2Active => Some(CanvasStage::Values),
            CanvasState::Stage3Active => Some(CanvasStage::Guidelines),
            CanvasState::AllComplete => None,
        }
    }

    /// Whether fields of `stage` accept edits in this state.
    ///
    /// Values stay open while guidelines are being written so the user can
    /// add a value a scenario needs; everything else is read-only unless it
    /// is the active stage.
    pub fn is_editable(&self, stage: CanvasStage) -> bool {
        matches!(
            (self, stage),
            (CanvasState::Stage1Active, CanvasStage::VisionMission)
                | (CanvasState::Stage2Active, CanvasStage::Values)
                | (CanvasState::Stage3Active, CanvasStage::Values)
                | (CanvasState::Stage3Active, CanvasStage::Guidelines)
        )
    }

    /// Returns true once the canvas has been finalized.
    pub fn is_complete(&self) -> bool {
        matches!(self, CanvasState::AllComplete)
    }
}

impl fmt::Display for CanvasState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CanvasState::Stage1Active => "stage_1_active",
            CanvasState::Stage2Active => "stage_2_active",
            CanvasState::Stage3Active => "stage_3_active",
            CanvasState::AllComplete => "all_complete",
        };
        write!(f, "{}", s)
    }
}

/// How a transition is set off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fires only when the user explicitly asks for it.
    ExplicitConfirm,
    /// Fires by itself on the first qualifying event in the source state.
    AutoOnFirstEvent,
}

/// Events the gate reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateTrigger {
    /// User confirmed vision and mission.
    ConfirmVisionMission,
    /// A core value was successfully appended.
    ValueAppended,
    /// User asked to finish the canvas.
    Finalize,
}

impl GateTrigger {
    pub fn kind(&self) -> TransitionKind {
        match self {
            GateTrigger::ConfirmVisionMission | GateTrigger::Finalize => {
                TransitionKind::ExplicitConfirm
            }
            GateTrigger::ValueAppended => TransitionKind::AutoOnFirstEvent,
        }
    }
}

/// One row of the transition table.
#[derive(Clone, Copy)]
pub struct Transition {
    pub from: CanvasState,
    pub trigger: GateTrigger,
    pub to: CanvasState,
    /// Must hold on the document at the moment the trigger fires.
    pub guard: fn(&StageProgress) -> bool,
}

fn vision_mission_complete(progress: &StageProgress) -> bool {
    progress.is_vision_mission_complete()
}

fn values_complete(progress: &StageProgress) -> bool {
    progress.is_values_complete()
}

// Finalize re-checks every stage even though none can be revoked.
fn all_complete(progress: &StageProgress) -> bool {
    progress.is_all_complete()
}

/// The complete transition table.
pub const TRANSITIONS: [Transition; 3] = [
    Transition {
        from: CanvasState::Stage1Active,
        trigger: GateTrigger::ConfirmVisionMission,
        to: CanvasState::Stage2Active,
        guard: vision_mission_complete,
    },
    Transition {
        from: CanvasState::Stage2Active,
        trigger: GateTrigger::ValueAppended,
        to: CanvasState::Stage3Active,
        guard: values_complete,
    },
    Transition {
        from: CanvasState::Stage3Active,
        trigger: GateTrigger::Finalize,
        to: CanvasState::AllComplete,
        guard: all_complete,
    },
];

impl StateMachine for CanvasState {
    fn can_transition_to(&self, target: &Self) -> bool {
        TRANSITIONS
            .iter()
            .any(|t| t.from == *self && t.to == *target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        TRANSITIONS
            .iter()
            .filter(|t| t.from == *self)
            .map(|t| t.to)
            .collect()
    }
}

/// What firing a trigger did to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Advanced { from: CanvasState, to: CanvasState },
    Unchanged,
}

/// Applies `trigger` to `state` given the document's current progress.
///
/// # Errors
///
/// - `StageIncomplete` if the transition exists but its guard does not hold
/// - `CanvasFinalized` for any explicit trigger after `AllComplete`
/// - `InvalidStateTransition` for an explicit trigger from the wrong stage
pub fn fire(
    state: CanvasState,
    trigger: GateTrigger,
    progress: &StageProgress,
) -> Result<GateOutcome, DomainError> {
    let Some(transition) = TRANSITIONS
        .iter()
        .find(|t| t.from == state && t.trigger == trigger)
    else {
        return match trigger.kind() {
            TransitionKind::AutoOnFirstEvent => Ok(GateOutcome::Unchanged),
            TransitionKind::ExplicitConfirm if state.is_complete() => Err(DomainError::new(
                ErrorCode::CanvasFinalized,
                "The canvas has already been finalized",
            )),
            TransitionKind::ExplicitConfirm => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("{:?} is not available in {}", trigger, state),
            )
            .with_detail("state", state.to_string())),
        };
    };

    if !(transition.guard)(progress) {
        return Err(DomainError::new(
            ErrorCode::StageIncomplete,
            format!("{:?} requires the current stage to be complete", trigger),
        )
        .with_detail("state", state.to_string()));
    }

    let to = state
        .transition_to(transition.to)
        .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;

    Ok(GateOutcome::Advanced { from: state, to })
}
