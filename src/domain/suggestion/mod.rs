//! Suggestion module - context-relevant guideline recommendations.

mod matcher;

pub use matcher::{match_suggestions, Suggestion, SuggestionOutcome};
