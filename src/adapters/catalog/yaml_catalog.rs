//! YAML Catalog Loader
//!
//! Parses a reference catalog document of the form
//!
//! ```yaml
//! values:
//!   - name: 诚信
//!     definitions: [...]
//! scenarios:
//!   - name: 项目延期
//!     description: ...
//!     suggestions:
//!       诚信: ...
//! ```
//!
//! Suggestion mappings keep the order they are written in.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::domain::catalog::{
    CatalogError, PredefinedValue, ReferenceCatalog, Scenario, ScenarioCatalog, ValueCatalog,
};

const BUILTIN_CATALOG_YAML: &str = include_str!("default_catalog.yaml");

static BUILTIN_CATALOG: Lazy<Result<ReferenceCatalog, CatalogError>> =
    Lazy::new(|| parse_catalog(BUILTIN_CATALOG_YAML));

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    values: Vec<PredefinedValue>,
    #[serde(default)]
    scenarios: Vec<Scenario>,
}

/// Parse a catalog from YAML text.
pub fn parse_catalog(yaml: &str) -> Result<ReferenceCatalog, CatalogError> {
    let file: CatalogFile =
        serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let values = ValueCatalog::new(file.values)?;
    let scenarios = ScenarioCatalog::new(file.scenarios)?;
    Ok(ReferenceCatalog::new(values, scenarios))
}

/// Read and parse a catalog file.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<ReferenceCatalog, CatalogError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;

    parse_catalog(&yaml).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Rejected catalog file");
        e
    })
}

/// The catalog shipped with the crate, parsed once per process.
pub fn builtin_catalog() -> Result<ReferenceCatalog, CatalogError> {
    BUILTIN_CATALOG.clone()
}
