//! # Skein Server
//!
//! Entry point for the Skein storefront API.

use anyhow::Context;
use skein_config::ConfigLoader;
use skein_server::{telemetry, Application};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_default_location()
        .load()
        .context("failed to load configuration")?;
    telemetry::init_telemetry(&config.observability)?;

    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    Application::build(config).await?.run().await
}
