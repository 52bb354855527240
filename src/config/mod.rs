//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NORTH_STAR_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use north_star_canvas::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Saving to {}", config.storage.data_dir.display());
//! ```

mod catalog;
mod error;
mod logging;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// file-backed session using the built-in catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Persistence backend, data directory and record key
    #[serde(default)]
    pub storage: StorageConfig,

    /// Reference catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Tracing filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NORTH_STAR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NORTH_STAR__STORAGE__DATA_DIR=./data` -> `storage.data_dir = ./data`
    /// - `NORTH_STAR__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NORTH_STAR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("NORTH_STAR__STORAGE__BACKEND");
        env::remove_var("NORTH_STAR__STORAGE__DATA_DIR");
        env::remove_var("NORTH_STAR__STORAGE__KEY");
        env::remove_var("NORTH_STAR__CATALOG__PATH");
        env::remove_var("NORTH_STAR__LOGGING__LEVEL");
        env::remove_var("NORTH_STAR__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.key, "northStarData");
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NORTH_STAR__STORAGE__BACKEND", "memory");
        env::set_var("NORTH_STAR__STORAGE__DATA_DIR", "/tmp/north-star");
        env::set_var("NORTH_STAR__CATALOG__PATH", "/etc/north-star/catalog.yaml");
        env::set_var("NORTH_STAR__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/north-star"));
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("/etc/north-star/catalog.yaml"))
        );
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_bad_storage_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NORTH_STAR__STORAGE__KEY", "a/b");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidStorageKey));
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NORTH_STAR__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
