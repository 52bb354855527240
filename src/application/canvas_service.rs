//! CanvasService - the session-scoped handle the front-end drives.
//!
//! Owns the canvas aggregate and wires each user action through the stage
//! gate, persistence, suggestion matching and the final handoff. Persisting
//! happens after every operation that produced canvas events, and only then.

use std::sync::Arc;

use crate::domain::canvas::{Canvas, CanvasState, CanvasView};
use crate::domain::catalog::{ReferenceCatalog, Scenario, ValueChoice, ValueOption};
use crate::domain::foundation::{CanvasSessionId, DomainError, ErrorCode};
use crate::domain::north_star::NorthStarDocument;
use crate::domain::suggestion::SuggestionOutcome;
use crate::ports::CompletionHandoff;

use super::{SaveOutcome, SessionContinuity};

/// A guideline added from a scenario suggestion.
///
/// Provenance is returned to the caller only; the document stores the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptedGuideline {
    pub index: usize,
    pub scenario: String,
    pub value_name: String,
    pub text: String,
}

/// Session handle for one north-star canvas.
pub struct CanvasService {
    canvas: Canvas,
    continuity: SessionContinuity,
    catalog: Arc<ReferenceCatalog>,
    handoff: Arc<dyn CompletionHandoff>,
}

impl CanvasService {
    /// Opens a session, resuming the saved document when there is one.
    pub async fn start(
        continuity: SessionContinuity,
        catalog: Arc<ReferenceCatalog>,
        handoff: Arc<dyn CompletionHandoff>,
    ) -> Self {
        let session_id = CanvasSessionId::new();
        let canvas = match continuity.load().await {
            Some(doc) => {
                let canvas = Canvas::resume(session_id, doc);
                tracing::info!(
                    session_id = %session_id,
                    key = continuity.key(),
                    state = %canvas.state(),
                    values = canvas.document().values().len(),
                    guidelines = canvas.document().guidelines().len(),
                    "Resumed north star canvas"
                );
                canvas
            }
            None => {
                tracing::info!(
                    session_id = %session_id,
                    key = continuity.key(),
                    "Started new north star canvas"
                );
                Canvas::new(session_id)
            }
        };

        Self {
            canvas,
            continuity,
            catalog,
            handoff,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> CanvasSessionId {
        self.canvas.session_id()
    }

    pub fn document(&self) -> &NorthStarDocument {
        self.canvas.document()
    }

    pub fn state(&self) -> CanvasState {
        self.canvas.state()
    }

    pub fn view(&self) -> CanvasView {
        self.canvas.view()
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Predefined values, flagged when already on the canvas.
    pub fn value_options(&self) -> Vec<ValueOption<'_>> {
        self.catalog.values().options(self.canvas.document())
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.catalog.scenarios().iter()
    }

    /// Suggestions from the named scenario for the values on the canvas.
    pub fn suggestions(&self, scenario_name: &str) -> Result<SuggestionOutcome, DomainError> {
        let scenario = self.scenario(scenario_name)?;
        Ok(self.canvas.suggestions_for(scenario))
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    pub async fn set_vision(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.canvas.set_vision(text)?;
        self.persist().await;
        Ok(())
    }

    pub async fn set_mission(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.canvas.set_mission(text)?;
        self.persist().await;
        Ok(())
    }

    pub async fn confirm_vision_mission(&mut self) -> Result<CanvasState, DomainError> {
        let state = self.canvas.confirm_vision_mission()?;
        self.persist().await;
        Ok(state)
    }

    pub async fn add_value(
        &mut self,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<CanvasState, DomainError> {
        let state = self.canvas.add_value(name, definition)?;
        self.persist().await;
        Ok(state)
    }

    /// Adds a value picked from the catalog or entered by hand.
    pub async fn choose_value(&mut self, choice: &ValueChoice) -> Result<CanvasState, DomainError> {
        let (name, definition) = choice.resolve(self.catalog.values(), self.canvas.document())?;
        self.add_value(name, definition).await
    }

    pub async fn add_guideline(&mut self, text: impl Into<String>) -> Result<usize, DomainError> {
        let index = self.canvas.add_guideline(text)?;
        self.persist().await;
        Ok(index)
    }

    /// Appends the scenario's suggestion for `value_name` as a guideline.
    ///
    /// Only suggestions applicable to the canvas's current values can be
    /// adopted.
    pub async fn adopt_suggestion(
        &mut self,
        scenario_name: &str,
        value_name: &str,
    ) -> Result<AdoptedGuideline, DomainError> {
        let scenario = self.scenario(scenario_name)?;
        let suggestion = self
            .canvas
            .suggestions_for(scenario)
            .suggestions()
            .iter()
            .find(|s| s.value_name == value_name)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UnknownValue,
                    format!(
                        "Scenario '{}' has no suggestion for a value '{}' on this canvas",
                        scenario_name, value_name
                    ),
                )
                .with_detail("scenario", scenario_name)
                .with_detail("value", value_name)
            })?;

        let index = self.add_guideline(suggestion.text.clone()).await?;
        Ok(AdoptedGuideline {
            index,
            scenario: scenario_name.to_string(),
            value_name: suggestion.value_name,
            text: suggestion.text,
        })
    }

    /// Finishes the canvas and hands the document to the downstream consumer.
    pub async fn finalize(&mut self) -> Result<NorthStarDocument, DomainError> {
        let document = self.canvas.finalize()?;
        self.persist().await;

        tracing::info!(session_id = %self.canvas.session_id(), "North star canvas finalized");
        if let Err(e) = self.handoff.hand_off(document.clone()).await {
            tracing::warn!(error = %e, "Completion handoff failed");
        }
        Ok(document)
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn scenario(&self, name: &str) -> Result<&Scenario, DomainError> {
        self.catalog.scenarios().get(name).ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnknownScenario,
                format!("Unknown scenario '{}'", name),
            )
            .with_detail("scenario", name)
        })
    }

    async fn persist(&mut self) {
        let events = self.canvas.take_events();
        if events.is_empty() {
            return;
        }
        for event in &events {
            tracing::debug!(event_type = event.event_type(), "Canvas event");
        }

        match self.continuity.save(self.canvas.document()).await {
            Ok(SaveOutcome::Written { sequence }) => {
                tracing::debug!(sequence, "Saved north star document");
            }
            Ok(outcome) => tracing::debug!(?outcome, "North star document not written"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save north star document");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::builtin_catalog;
    use crate::adapters::handoff::RecordingHandoff;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::catalog::DefinitionChoice;
    use crate::ports::HandoffError;
    use async_trait::async_trait;

    const KEY: &str = "northStarData";

    struct Harness {
        store: InMemoryKeyValueStore,
        handoff: RecordingHandoff,
        service: CanvasService,
    }

    async fn harness_with(store: InMemoryKeyValueStore) -> Harness {
        let handoff = RecordingHandoff::new();
        let service = CanvasService::start(
            SessionContinuity::new(Arc::new(store.clone()), KEY),
            Arc::new(builtin_catalog().unwrap()),
            Arc::new(handoff.clone()),
        )
        .await;
        Harness {
            store,
            handoff,
            service,
        }
    }

    async fn harness() -> Harness {
        harness_with(InMemoryKeyValueStore::new()).await
    }

    /// Consumer that refuses every document.
    struct RejectingHandoff;

    #[async_trait]
    impl CompletionHandoff for RejectingHandoff {
        async fn hand_off(&self, _document: NorthStarDocument) -> Result<(), HandoffError> {
            Err(HandoffError::Rejected("export target offline".to_string()))
        }
    }

    async fn through_stage_one(service: &mut CanvasService) {
        service.set_vision("V").await.unwrap();
        service.set_mission("M").await.unwrap();
        service.confirm_vision_mission().await.unwrap();
    }

    #[tokio::test]
    async fn test_every_successful_mutation_persists() {
        let mut h = harness().await;

        h.service.set_vision("V").await.unwrap();
        assert_eq!(h.store.write_count().await, 1);

        h.service.set_mission("M").await.unwrap();
        h.service.confirm_vision_mission().await.unwrap();
        assert_eq!(h.store.write_count().await, 3);
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_persist() {
        let mut h = harness().await;
        h.service.set_vision("V").await.unwrap();

        let err = h.service.confirm_vision_mission().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StageIncomplete);
        assert_eq!(h.store.write_count().await, 1);
    }

    #[tokio::test]
    async fn test_clearing_vision_on_empty_canvas_is_not_written() {
        let mut h = harness().await;
        h.service.set_vision("").await.unwrap();
        assert_eq!(h.store.write_count().await, 0);
    }

    #[tokio::test]
    async fn test_choose_predefined_value_with_suggested_definition() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;

        let state = h
            .service
            .choose_value(&ValueChoice::Predefined {
                name: "诚信".to_string(),
                definition: DefinitionChoice::Suggested(0),
            })
            .await
            .unwrap();

        assert_eq!(state, CanvasState::Stage3Active);
        let value = &h.service.document().values()[0];
        assert_eq!(value.name(), "诚信");
        assert_eq!(value.definition(), "我们坦诚沟通，言出必行，建立信任关系。");
    }

    #[tokio::test]
    async fn test_added_value_is_no_longer_selectable() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("诚信", "X").await.unwrap();

        let options = h.service.value_options();
        let honesty = options.iter().find(|o| o.name == "诚信").unwrap();
        assert!(honesty.already_added);

        let err = h
            .service
            .choose_value(&ValueChoice::Predefined {
                name: "诚信".to_string(),
                definition: DefinitionChoice::Suggested(1),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueUnavailable);
    }

    #[tokio::test]
    async fn test_suggestions_for_unknown_scenario() {
        let h = harness().await;
        let err = h.service.suggestions("火星殖民").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownScenario);
    }

    #[tokio::test]
    async fn test_suggestions_follow_scenario_order() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("用户至上", "X").await.unwrap();
        h.service.add_value("协作", "Y").await.unwrap();

        let outcome = h.service.suggestions("意见分歧").unwrap();

        let names: Vec<_> = outcome
            .suggestions()
            .iter()
            .map(|s| s.value_name.as_str())
            .collect();
        assert_eq!(names, vec!["协作", "用户至上"]);
    }

    #[tokio::test]
    async fn test_scenario_without_held_values_has_no_suggestion() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("创新", "X").await.unwrap();

        let outcome = h.service.suggestions("项目延期").unwrap();

        assert_eq!(outcome, SuggestionOutcome::NoApplicableSuggestion);
    }

    #[tokio::test]
    async fn test_adopt_suggestion_appends_text_as_guideline() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("诚信", "X").await.unwrap();

        let adopted = h.service.adopt_suggestion("项目延期", "诚信").await.unwrap();

        assert_eq!(adopted.index, 0);
        assert_eq!(adopted.scenario, "项目延期");
        assert_eq!(
            h.service.document().guidelines(),
            &["我们及时透明地向相关方沟通实际情况，不粉饰问题，共同寻找解决方案。".to_string()]
        );
    }

    #[tokio::test]
    async fn test_adopt_suggestion_for_value_not_on_canvas_fails() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("创新", "X").await.unwrap();

        let err = h
            .service
            .adopt_suggestion("项目延期", "诚信")
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UnknownValue);
        assert!(h.service.document().guidelines().is_empty());
    }

    #[tokio::test]
    async fn test_finalize_hands_off_document_unchanged() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("用户至上", "X").await.unwrap();
        h.service.add_guideline("G").await.unwrap();
        let before = h.service.document().clone();

        let finished = h.service.finalize().await.unwrap();

        assert_eq!(finished, before);
        assert_eq!(h.service.state(), CanvasState::AllComplete);
        assert_eq!(h.handoff.received().await, vec![before]);
    }

    #[tokio::test]
    async fn test_start_resumes_saved_document() {
        let mut first = harness().await;
        through_stage_one(&mut first.service).await;
        first.service.add_value("卓越", "X").await.unwrap();

        let resumed = harness_with(first.store.clone()).await;

        assert_eq!(resumed.service.state(), CanvasState::Stage3Active);
        assert_eq!(resumed.service.document(), first.service.document());
    }

    #[tokio::test]
    async fn test_start_with_corrupt_record_begins_empty() {
        let store = InMemoryKeyValueStore::with_record(KEY, "][");
        let h = harness_with(store).await;

        assert_eq!(h.service.state(), CanvasState::Stage1Active);
        assert!(!h.service.document().is_non_trivial());
    }

    #[tokio::test]
    async fn test_guideline_is_stored_trimmed() {
        let mut h = harness().await;
        through_stage_one(&mut h.service).await;
        h.service.add_value("诚信", "X").await.unwrap();

        h.service.add_guideline("  我们坦诚表达不同观点。 ").await.unwrap();

        assert_eq!(
            h.service.document().guidelines(),
            &["我们坦诚表达不同观点。".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejected_handoff_still_finalizes() {
        let store = InMemoryKeyValueStore::new();
        let mut service = CanvasService::start(
            SessionContinuity::new(Arc::new(store.clone()), KEY),
            Arc::new(builtin_catalog().unwrap()),
            Arc::new(RejectingHandoff),
        )
        .await;
        through_stage_one(&mut service).await;
        service.add_value("诚信", "X").await.unwrap();
        service.add_guideline("G").await.unwrap();
        let before = service.document().clone();

        let finished = service.finalize().await.unwrap();

        assert_eq!(finished, before);
        assert_eq!(service.state(), CanvasState::AllComplete);
    }

    #[tokio::test]
    async fn test_resumed_record_with_blank_vision_can_still_finish() {
        let store = InMemoryKeyValueStore::with_record(
            KEY,
            r#"{"vision":"","mission":"","values":[{"name":"诚信","definition":"X"}],"guidelines":["G"]}"#,
        );
        let mut h = harness_with(store).await;
        assert_eq!(h.service.state(), CanvasState::Stage1Active);

        through_stage_one(&mut h.service).await;
        h.service.add_value("创新", "Y").await.unwrap();
        h.service.finalize().await.unwrap();

        assert_eq!(h.service.state(), CanvasState::AllComplete);
        let handed = h.handoff.received().await;
        assert_eq!(handed.len(), 1);
        assert_eq!(handed[0].vision(), "V");
        assert_eq!(handed[0].guidelines(), &["G".to_string()]);
    }
}
