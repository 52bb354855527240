//! CoreValue value object - a named principle with its working definition.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A core value as recorded on the canvas.
///
/// Immutable once constructed; the document only ever appends new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreValue {
    name: String,
    definition: String,
}

impl CoreValue {
    /// Creates a core value, rejecting a blank name or definition.
    pub fn new(
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let value = Self {
            name: name.into(),
            definition: definition.into(),
        };
        value.validate()?;
        Ok(value)
    }

    /// Returns the value name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the definition text.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Checks the non-empty invariants. Used again after deserialization.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("value.name"));
        }
        if self.definition.trim().is_empty() {
            return Err(ValidationError::empty_field("value.definition"));
        }
        Ok(())
    }
}
