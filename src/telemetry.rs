//! Tracing subscriber setup.
//!
//! Log lines go to stderr; stdout belongs to the terminal front-end.

use std::error::Error;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured directive.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let filter = build_filter(config)?;

    match config.format {
        LogFormat::Pretty => fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(false)
            .try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init(),
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, Box<dyn Error + Send + Sync + 'static>> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.level)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_directive_parses() {
        let config = LoggingConfig::default();
        assert!(EnvFilter::try_new(&config.level).is_ok());
    }

    #[test]
    fn test_malformed_directive_is_rejected() {
        assert!(EnvFilter::try_new("north_star_canvas=loud").is_err());
    }
}
