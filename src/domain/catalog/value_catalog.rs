//! Predefined core values offered to the user, with candidate definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::north_star::NorthStarDocument;

use super::CatalogError;

/// A core value the catalog suggests, with ready-made definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedValue {
    pub name: String,
    #[serde(default)]
    pub definitions: Vec<String>,
}

impl PredefinedValue {
    pub fn new<I, S>(name: impl Into<String>, definitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            definitions: definitions.into_iter().map(Into::into).collect(),
        }
    }
}

/// A predefined value as presented for selection against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOption<'a> {
    pub name: &'a str,
    pub definitions: &'a [String],
    /// Already on the canvas, so it cannot be picked again.
    pub already_added: bool,
}

/// Read-only catalog of predefined values keyed by name, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCatalog {
    entries: IndexMap<String, PredefinedValue>,
}

impl ValueCatalog {
    /// Builds a catalog, rejecting blank or repeated names.
    pub fn new(values: impl IntoIterator<Item = PredefinedValue>) -> Result<Self, CatalogError> {
        let mut entries = IndexMap::new();
        for value in values {
            if value.name.trim().is_empty() {
                return Err(CatalogError::BlankName { kind: "value" });
            }
            if entries.contains_key(&value.name) {
                return Err(CatalogError::DuplicateEntry {
                    kind: "value",
                    name: value.name,
                });
            }
            entries.insert(value.name.clone(), value);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&PredefinedValue> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredefinedValue> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every predefined value in catalog order, flagged when the document
    /// already holds a value with that name.
    pub fn options<'a>(&'a self, doc: &NorthStarDocument) -> Vec<ValueOption<'a>> {
        self.entries
            .values()
            .map(|v| ValueOption {
                name: &v.name,
                definitions: &v.definitions,
                already_added: doc.has_value(&v.name),
            })
            .collect()
    }
}
