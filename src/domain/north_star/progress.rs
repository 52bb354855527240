//! StageProgress value object - derived completion of the three stages.
//!
//! Always computed from a document on demand; never stored alongside it.

use super::NorthStarDocument;

/// A snapshot of which stages the document satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageProgress {
    vision_mission: bool,
    values: bool,
    guidelines: bool,
}

impl StageProgress {
    /// Total number of stages on the canvas.
    pub const STAGE_COUNT: usize = 3;

    /// Computes progress for a document.
    pub fn of(doc: &NorthStarDocument) -> Self {
        Self {
            vision_mission: !doc.vision().trim().is_empty() && !doc.mission().trim().is_empty(),
            values: !doc.values().is_empty(),
            guidelines: !doc.guidelines().is_empty(),
        }
    }

    /// Vision and mission are both non-blank after trimming.
    pub fn is_vision_mission_complete(&self) -> bool {
        self.vision_mission
    }

    /// At least one core value exists.
    pub fn is_values_complete(&self) -> bool {
        self.values
    }

    /// At least one guideline exists.
    pub fn is_guidelines_complete(&self) -> bool {
        self.guidelines
    }

    /// All three stage predicates hold.
    pub fn is_all_complete(&self) -> bool {
        self.vision_mission && self.values && self.guidelines
    }

    /// Number of stages whose predicate holds.
    pub fn completed_count(&self) -> usize {
        [self.vision_mission, self.values, self.guidelines]
            .iter()
            .filter(|done| **done)
            .count()
    }

    /// Completion percentage (0-100), rounded down.
    pub fn percent_complete(&self) -> u8 {
        ((self.completed_count() * 100) / Self::STAGE_COUNT) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn doc(vision: &str, mission: &str) -> NorthStarDocument {
        let mut doc = NorthStarDocument::new();
        doc.set_vision(vision);
        doc.set_mission(mission);
        doc
    }

    #[test]
    fn empty_document_completes_nothing() {
        let progress = StageProgress::of(&NorthStarDocument::new());
        assert!(!progress.is_vision_mission_complete());
        assert!(!progress.is_values_complete());
        assert!(!progress.is_guidelines_complete());
        assert_eq!(progress.percent_complete(), 0);
    }

    #[test]
    fn minimal_vision_and_mission_complete_stage_one() {
        let progress = StageProgress::of(&doc("V", "M"));
        assert!(progress.is_vision_mission_complete());
        assert_eq!(progress.completed_count(), 1);
        assert_eq!(progress.percent_complete(), 33);
    }

    #[test]
    fn missing_mission_leaves_stage_one_incomplete() {
        assert!(!StageProgress::of(&doc("V", "")).is_vision_mission_complete());
    }

    #[test]
    fn all_stages_complete_gives_full_percentage() {
        let mut d = doc("V", "M");
        d.append_value("诚信", "X").unwrap();
        d.append_guideline("G").unwrap();

        let progress = d.progress();
        assert!(progress.is_all_complete());
        assert_eq!(progress.percent_complete(), 100);
    }

    #[test]
    fn progress_follows_document_changes() {
        let mut d = doc("V", "M");
        assert!(d.progress().is_vision_mission_complete());
        d.set_mission("   ");
        assert!(!d.progress().is_vision_mission_complete());
    }

    proptest! {
        #[test]
        fn stage_one_complete_iff_both_fields_non_blank(
            vision in "[ \\t\\n]{0,3}[a-z]{0,3}[ \\t\\n]{0,3}",
            mission in "[ \\t\\n]{0,3}[a-z]{0,3}[ \\t\\n]{0,3}",
        ) {
            let expected = !vision.trim().is_empty() && !mission.trim().is_empty();
            prop_assert_eq!(
                StageProgress::of(&doc(&vision, &mission)).is_vision_mission_complete(),
                expected
            );
        }
    }
}
