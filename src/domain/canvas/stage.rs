//! CanvasStage enum - the three sections of the canvas, top to bottom.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::north_star::StageProgress;

/// One of the three sequential canvas sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasStage {
    VisionMission,
    Values,
    Guidelines,
}

impl CanvasStage {
    /// The canonical order of stages.
    pub const ORDER: [CanvasStage; 3] = [
        CanvasStage::VisionMission,
        CanvasStage::Values,
        CanvasStage::Guidelines,
    ];

    /// Returns all stages in order.
    pub fn all() -> &'static [CanvasStage; 3] {
        &Self::ORDER
    }

    /// 1-based stage number as shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            CanvasStage::VisionMission => 1,
            CanvasStage::Values => 2,
            CanvasStage::Guidelines => 3,
        }
    }

    /// Whether the document satisfies this stage's completion predicate.
    pub fn is_complete(&self, progress: &StageProgress) -> bool {
        match self {
            CanvasStage::VisionMission => progress.is_vision_mission_complete(),
            CanvasStage::Values => progress.is_values_complete(),
            CanvasStage::Guidelines => progress.is_guidelines_complete(),
        }
    }
}

impl fmt::Display for CanvasStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CanvasStage::VisionMission => "Vision & Mission",
            CanvasStage::Values => "Core Values",
            CanvasStage::Guidelines => "Guidelines",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::north_star::NorthStarDocument;

    #[test]
    fn numbers_follow_order() {
        let numbers: Vec<_> = CanvasStage::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn ordering_matches_sequence() {
        assert!(CanvasStage::VisionMission < CanvasStage::Values);
        assert!(CanvasStage::Values < CanvasStage::Guidelines);
    }

    #[test]
    fn completion_reads_matching_predicate() {
        let mut doc = NorthStarDocument::new();
        doc.append_value("诚信", "X").unwrap();
        let progress = doc.progress();
        assert!(!CanvasStage::VisionMission.is_complete(&progress));
        assert!(CanvasStage::Values.is_complete(&progress));
        assert!(!CanvasStage::Guidelines.is_complete(&progress));
    }
}
