//! Canvas aggregate - the document together with its stage gate.
//!
//! The canvas owns the in-progress `NorthStarDocument`, the gate state and a
//! buffer of domain events. Every public mutation either succeeds and
//! records events, or fails and leaves document, state and buffer untouched.

use crate::domain::catalog::Scenario;
use crate::domain::foundation::{CanvasSessionId, DomainError, ErrorCode, Timestamp};
use crate::domain::north_star::{NorthStarDocument, StageProgress};
use crate::domain::suggestion::{match_suggestions, SuggestionOutcome};

use super::gate::{self, GateOutcome, GateTrigger};
use super::{CanvasEvent, CanvasStage, CanvasState, CanvasView};

/// The canvas aggregate root.
#[derive(Debug, Clone)]
pub struct Canvas {
    session_id: CanvasSessionId,
    document: NorthStarDocument,
    state: CanvasState,
    domain_events: Vec<CanvasEvent>,
}

impl Canvas {
    /// Starts a fresh canvas with an empty document in `Stage1Active`.
    pub fn new(session_id: CanvasSessionId) -> Self {
        Self {
            session_id,
            document: NorthStarDocument::new(),
            state: CanvasState::default(),
            domain_events: Vec::new(),
        }
    }

    /// Reopens a canvas around a previously saved document.
    ///
    /// Gate state is not persisted, so it is inferred. A document with
    /// complete vision, mission and at least one value resumes in
    /// `Stage3Active`. Anything else, including a record holding values but
    /// a blank vision or mission, resumes in `Stage1Active` and needs a
    /// fresh confirmation. No events are recorded.
    pub fn resume(session_id: CanvasSessionId, document: NorthStarDocument) -> Self {
        let progress = document.progress();
        let state = if progress.is_vision_mission_complete() && progress.is_values_complete() {
            CanvasState::Stage3Active
        } else {
            CanvasState::Stage1Active
        };
        Self {
            session_id,
            document,
            state,
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> CanvasSessionId {
        self.session_id
    }

    pub fn document(&self) -> &NorthStarDocument {
        &self.document
    }

    pub fn state(&self) -> CanvasState {
        self.state
    }

    /// Completion predicates, derived from the document on every call.
    pub fn progress(&self) -> StageProgress {
        self.document.progress()
    }

    pub fn view(&self) -> CanvasView {
        CanvasView::project(self.state, &self.document)
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Stage 1: vision & mission
    // ───────────────────────────────────────────────────────────────

    pub fn set_vision(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_editable(CanvasStage::VisionMission)?;
        self.document.set_vision(text);
        self.record_event(CanvasEvent::VisionUpdated {
            session_id: self.session_id,
            occurred_at: Timestamp::now(),
        });
        Ok(())
    }

    pub fn set_mission(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_editable(CanvasStage::VisionMission)?;
        self.document.set_mission(text);
        self.record_event(CanvasEvent::MissionUpdated {
            session_id: self.session_id,
            occurred_at: Timestamp::now(),
        });
        Ok(())
    }

    /// Explicitly confirms stage 1, unlocking core values.
    ///
    /// Fails with `StageIncomplete` unless vision and mission are both
    /// non-blank right now.
    pub fn confirm_vision_mission(&mut self) -> Result<CanvasState, DomainError> {
        self.apply(GateTrigger::ConfirmVisionMission)?;
        Ok(self.state)
    }

    // ───────────────────────────────────────────────────────────────
    // Stage 2: core values
    // ───────────────────────────────────────────────────────────────

    /// Appends a core value. The first value added while in
    /// `Stage2Active` moves the gate to `Stage3Active` on its own.
    pub fn add_value(
        &mut self,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<CanvasState, DomainError> {
        self.ensure_editable(CanvasStage::Values)?;
        let name = self.document.append_value(name, definition)?.name().to_string();
        self.record_event(CanvasEvent::ValueAdded {
            session_id: self.session_id,
            name,
            occurred_at: Timestamp::now(),
        });
        self.apply(GateTrigger::ValueAppended)?;
        Ok(self.state)
    }

    // ───────────────────────────────────────────────────────────────
    // Stage 3: guidelines
    // ───────────────────────────────────────────────────────────────

    /// Appends a guideline, returning its position.
    pub fn add_guideline(&mut self, text: impl Into<String>) -> Result<usize, DomainError> {
        self.ensure_editable(CanvasStage::Guidelines)?;
        let index = self.document.append_guideline(text)?;
        self.record_event(CanvasEvent::GuidelineAdded {
            session_id: self.session_id,
            index,
            occurred_at: Timestamp::now(),
        });
        Ok(index)
    }

    /// Suggestions from `scenario` applicable to the values on the canvas.
    pub fn suggestions_for(&self, scenario: &Scenario) -> SuggestionOutcome {
        SuggestionOutcome::from_matches(match_suggestions(scenario, self.document.values()))
    }

    // ───────────────────────────────────────────────────────────────
    // Completion
    // ───────────────────────────────────────────────────────────────

    /// Finishes the canvas and returns the document to hand off.
    ///
    /// Re-verifies all three stage predicates before leaving `Stage3Active`.
    pub fn finalize(&mut self) -> Result<NorthStarDocument, DomainError> {
        self.apply(GateTrigger::Finalize)?;
        self.record_event(CanvasEvent::Finalized {
            session_id: self.session_id,
            occurred_at: Timestamp::now(),
        });
        Ok(self.document.clone())
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn ensure_editable(&self, stage: CanvasStage) -> Result<(), DomainError> {
        if self.state.is_complete() {
            return Err(DomainError::new(
                ErrorCode::CanvasFinalized,
                "The canvas has already been finalized",
            ));
        }
        if !self.state.is_editable(stage) {
            return Err(DomainError::new(
                ErrorCode::StageLocked,
                format!("{} is not editable in {}", stage, self.state),
            )
            .with_detail("stage", stage.number().to_string())
            .with_detail("state", self.state.to_string()));
        }
        Ok(())
    }

    fn apply(&mut self, trigger: GateTrigger) -> Result<GateOutcome, DomainError> {
        let outcome = gate::fire(self.state, trigger, &self.document.progress())?;
        if let GateOutcome::Advanced { from, to } = outcome {
            self.state = to;
            self.record_event(CanvasEvent::StageAdvanced {
                session_id: self.session_id,
                from,
                to,
                occurred_at: Timestamp::now(),
            });
        }
        Ok(outcome)
    }

    fn record_event(&mut self, event: CanvasEvent) {
        self.domain_events.push(event);
    }
}
