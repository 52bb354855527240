//! Reference catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Source of predefined values and scenarios
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}
