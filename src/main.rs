use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use north_star_canvas::adapters::{
    builtin_catalog, load_catalog, FileKeyValueStore, InMemoryKeyValueStore, TracingHandoff,
};
use north_star_canvas::application::{CanvasService, SessionContinuity};
use north_star_canvas::cli::{self, Flow};
use north_star_canvas::config::{AppConfig, ConfigError, StorageBackend};
use north_star_canvas::domain::catalog::{CatalogError, ReferenceCatalog};
use north_star_canvas::ports::KeyValueStore;
use north_star_canvas::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_tracing(&config.logging) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    let catalog = match reference_catalog(&config).await {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load reference catalog");
            return ExitCode::FAILURE;
        }
    };

    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    };
    let continuity = SessionContinuity::new(store, config.storage.key.clone());
    let mut service = CanvasService::start(continuity, catalog, Arc::new(TracingHandoff::new())).await;

    println!("North Star Canvas. Type 'help' for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                return ExitCode::FAILURE;
            }
        };

        let command = match cli::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match cli::execute(&mut service, command).await {
            Ok(Flow::Continue(reply)) => println!("{}", reply),
            Ok(Flow::Quit) => break,
            Err(e) => println!("{}", e.message),
        }
    }

    ExitCode::SUCCESS
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

async fn reference_catalog(config: &AppConfig) -> Result<ReferenceCatalog, CatalogError> {
    match &config.catalog.path {
        Some(path) => load_catalog(path).await,
        None => builtin_catalog(),
    }
}
