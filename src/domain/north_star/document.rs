//! NorthStarDocument - the root aggregate the canvas edits.
//!
//! Holds vision, mission, the ordered list of core values and the ordered
//! list of behavioural guidelines. Every update is all-or-nothing: a failed
//! append returns an error and leaves the document exactly as it was.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

use super::{CoreValue, StageProgress};

/// The user's north-star document.
///
/// The serialized form is the persisted record: exactly `vision`, `mission`,
/// `values` and `guidelines`, with unknown fields rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NorthStarDocument {
    vision: String,
    mission: String,
    values: Vec<CoreValue>,
    guidelines: Vec<String>,
}

impl NorthStarDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn vision(&self) -> &str {
        &self.vision
    }

    pub fn mission(&self) -> &str {
        &self.mission
    }

    /// Core values in insertion (display) order.
    pub fn values(&self) -> &[CoreValue] {
        &self.values
    }

    /// Guidelines in insertion order.
    pub fn guidelines(&self) -> &[String] {
        &self.guidelines
    }

    /// Returns true if a value with exactly this name was already added.
    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name() == name)
    }

    /// Names of all added values, in insertion order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(CoreValue::name)
    }

    /// Derived completion predicates, recomputed on every call.
    pub fn progress(&self) -> StageProgress {
        StageProgress::of(self)
    }

    /// True once the user has entered anything at all.
    ///
    /// A fully empty document is never persisted, so a blank first render
    /// cannot overwrite a previously saved session.
    pub fn is_non_trivial(&self) -> bool {
        !self.vision.is_empty()
            || !self.mission.is_empty()
            || !self.values.is_empty()
            || !self.guidelines.is_empty()
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Replaces the vision unconditionally. Blank text is checked only at
    /// stage completion.
    pub fn set_vision(&mut self, text: impl Into<String>) {
        self.vision = text.into();
    }

    /// Replaces the mission unconditionally.
    pub fn set_mission(&mut self, text: impl Into<String>) {
        self.mission = text.into();
    }

    /// Appends a core value at the end of the list.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or definition is blank
    /// - `DuplicateName` if a value with the same name already exists
    pub fn append_value(
        &mut self,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<&CoreValue, ValidationError> {
        let value = CoreValue::new(name, definition)?;
        if self.has_value(value.name()) {
            return Err(ValidationError::duplicate_name("values", value.name()));
        }
        self.values.push(value);
        Ok(&self.values[self.values.len() - 1])
    }

    /// Appends a guideline at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the text is blank after trimming.
    /// Surrounding whitespace is not stored.
    pub fn append_guideline(&mut self, text: impl Into<String>) -> Result<usize, ValidationError> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("guideline"));
        }
        self.guidelines.push(text.to_string());
        Ok(self.guidelines.len() - 1)
    }

    /// Re-checks the invariants of a document that did not come through the
    /// append methods (e.g. one read back from storage).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for value in &self.values {
            value.validate()?;
            if !seen.insert(value.name()) {
                return Err(ValidationError::duplicate_name("values", value.name()));
            }
        }
        if self.guidelines.iter().any(|g| g.trim().is_empty()) {
            return Err(ValidationError::empty_field("guideline"));
        }
        Ok(())
    }
}
