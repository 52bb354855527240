//! Catalog Adapters
//!
//! Loads reference catalogs (predefined values and scenarios) from YAML,
//! either the built-in default or a file supplied through configuration.

mod yaml_catalog;

pub use yaml_catalog::{builtin_catalog, load_catalog, parse_catalog};
