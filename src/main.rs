use models::{CliApp, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod dorks;
mod error;
mod extractor;
mod harvester;
mod models;
mod pipeline;
mod validator;

use config::{load_config, Config};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("contact_finder={}", config.logging.level).parse()?),
        )
        .init();

    if config.search.default_region.is_some() && config.phone_region().is_none() {
        warn!("Unknown phone region in config.yml, falling back to unspecified");
    }

    // Initialize and run CLI app
    let app = CliApp::new(config)?;

    // Add graceful shutdown
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
