//! Catalog module - read-only reference data consulted by the canvas.
//!
//! - `ValueCatalog` - predefined core values with candidate definitions
//! - `ScenarioCatalog` - scenarios mapping value names to suggested guidelines
//! - `ReferenceCatalog` - both, injected into the session as one unit
//!
//! Catalogs are never mutated after construction. Loading them from YAML is
//! an adapter concern (see `adapters::catalog`).

mod scenario;
mod selection;
mod value_catalog;

pub use scenario::{Scenario, ScenarioCatalog};
pub use selection::{DefinitionChoice, ValueChoice};
pub use value_catalog::{PredefinedValue, ValueCatalog, ValueOption};

use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate {kind} '{name}' in catalog")]
    DuplicateEntry { kind: &'static str, name: String },

    #[error("Catalog contains a {kind} with a blank name")]
    BlankName { kind: &'static str },

    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// Predefined values and scenarios, bundled for injection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCatalog {
    values: ValueCatalog,
    scenarios: ScenarioCatalog,
}

impl ReferenceCatalog {
    pub fn new(values: ValueCatalog, scenarios: ScenarioCatalog) -> Self {
        Self { values, scenarios }
    }

    pub fn values(&self) -> &ValueCatalog {
        &self.values
    }

    pub fn scenarios(&self) -> &ScenarioCatalog {
        &self.scenarios
    }
}
