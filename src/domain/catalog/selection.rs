//! ValueChoice - what the user picked when adding a core value.
//!
//! Either one of the catalog's predefined values (with one of its candidate
//! definitions or a definition of their own) or an entirely custom value.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::north_star::NorthStarDocument;

use super::ValueCatalog;

/// How the definition of a predefined value was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionChoice {
    /// Index into the predefined value's candidate definitions.
    Suggested(usize),
    Custom(String),
}

/// A pending value selection, resolved against the catalog and document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueChoice {
    Predefined {
        name: String,
        definition: DefinitionChoice,
    },
    Custom {
        name: String,
        definition: String,
    },
}

impl ValueChoice {
    /// Resolves the selection into a trimmed `(name, definition)` pair.
    ///
    /// # Errors
    ///
    /// - `UnknownValue` if a predefined name or definition index is not in the catalog
    /// - `ValueUnavailable` if a predefined value is already on the canvas
    /// - `EmptyField` if the resulting name or definition is blank
    pub fn resolve(
        &self,
        catalog: &ValueCatalog,
        doc: &NorthStarDocument,
    ) -> Result<(String, String), DomainError> {
        let (name, definition) = match self {
            ValueChoice::Predefined { name, definition } => {
                let predefined = catalog.get(name).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::UnknownValue,
                        format!("'{}' is not a predefined value", name),
                    )
                })?;
                if doc.has_value(&predefined.name) {
                    return Err(DomainError::new(
                        ErrorCode::ValueUnavailable,
                        format!("'{}' has already been added", predefined.name),
                    )
                    .with_detail("value", predefined.name.clone()));
                }
                let text = match definition {
                    DefinitionChoice::Suggested(index) => {
                        predefined.definitions.get(*index).cloned().ok_or_else(|| {
                            DomainError::new(
                                ErrorCode::UnknownValue,
                                format!(
                                    "'{}' has no suggested definition #{}",
                                    predefined.name,
                                    index + 1
                                ),
                            )
                        })?
                    }
                    DefinitionChoice::Custom(text) => text.clone(),
                };
                (predefined.name.clone(), text)
            }
            ValueChoice::Custom { name, definition } => (name.clone(), definition.clone()),
        };

        let name = name.trim().to_string();
        let definition = definition.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("value.name").into());
        }
        if definition.is_empty() {
            return Err(ValidationError::empty_field("value.definition").into());
        }
        Ok((name, definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PredefinedValue;

    fn catalog() -> ValueCatalog {
        ValueCatalog::new([
            PredefinedValue::new("创新", ["我们鼓励每一次大胆的尝试和失败。", "我们保持好奇心。"]),
            PredefinedValue::new("卓越", ["我们追求高标准。"]),
        ])
        .unwrap()
    }

    #[test]
    fn predefined_with_suggested_definition() {
        let choice = ValueChoice::Predefined {
            name: "创新".into(),
            definition: DefinitionChoice::Suggested(1),
        };
        let resolved = choice.resolve(&catalog(), &NorthStarDocument::new()).unwrap();
        assert_eq!(resolved, ("创新".to_string(), "我们保持好奇心。".to_string()));
    }

    #[test]
    fn predefined_with_custom_definition_is_trimmed() {
        let choice = ValueChoice::Predefined {
            name: "卓越".into(),
            definition: DefinitionChoice::Custom("  做到极致  ".into()),
        };
        let resolved = choice.resolve(&catalog(), &NorthStarDocument::new()).unwrap();
        assert_eq!(resolved.1, "做到极致");
    }

    #[test]
    fn custom_value_is_trimmed() {
        let choice = ValueChoice::Custom {
            name: " 开放 ".into(),
            definition: " 我们分享信息 ".into(),
        };
        let resolved = choice.resolve(&catalog(), &NorthStarDocument::new()).unwrap();
        assert_eq!(resolved, ("开放".to_string(), "我们分享信息".to_string()));
    }

    #[test]
    fn already_added_predefined_value_is_unavailable() {
        let mut doc = NorthStarDocument::new();
        doc.append_value("创新", "x").unwrap();
        let choice = ValueChoice::Predefined {
            name: "创新".into(),
            definition: DefinitionChoice::Suggested(0),
        };
        let err = choice.resolve(&catalog(), &doc).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueUnavailable);
    }

    #[test]
    fn unknown_predefined_name_is_rejected() {
        let choice = ValueChoice::Predefined {
            name: "勇气".into(),
            definition: DefinitionChoice::Suggested(0),
        };
        let err = choice.resolve(&catalog(), &NorthStarDocument::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownValue);
    }

    #[test]
    fn out_of_range_definition_index_is_rejected() {
        let choice = ValueChoice::Predefined {
            name: "卓越".into(),
            definition: DefinitionChoice::Suggested(5),
        };
        let err = choice.resolve(&catalog(), &NorthStarDocument::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownValue);
    }

    #[test]
    fn blank_custom_definition_is_rejected() {
        let choice = ValueChoice::Custom {
            name: "开放".into(),
            definition: "   ".into(),
        };
        let err = choice.resolve(&catalog(), &NorthStarDocument::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
