//! Scenarios - situational prompts linking core values to guideline text.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A named situation with one suggested guideline per relevant value.
///
/// `suggestions` keeps the order in which the catalog lists them; the
/// matcher's output follows that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub suggestions: IndexMap<String, String>,
}

impl Scenario {
    pub fn new<I, K, V>(name: impl Into<String>, description: impl Into<String>, suggestions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            suggestions: suggestions
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Read-only catalog of scenarios keyed by name, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioCatalog {
    entries: IndexMap<String, Scenario>,
}

impl ScenarioCatalog {
    /// Builds a catalog, rejecting blank or repeated scenario names.
    pub fn new(scenarios: impl IntoIterator<Item = Scenario>) -> Result<Self, CatalogError> {
        let mut entries = IndexMap::new();
        for scenario in scenarios {
            if scenario.name.trim().is_empty() {
                return Err(CatalogError::BlankName { kind: "scenario" });
            }
            if entries.contains_key(&scenario.name) {
                return Err(CatalogError::DuplicateEntry {
                    kind: "scenario",
                    name: scenario.name,
                });
            }
            entries.insert(scenario.name.clone(), scenario);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
