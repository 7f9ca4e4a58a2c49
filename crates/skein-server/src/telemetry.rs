//! Logging setup.

use anyhow::Context;
use skein_config::ObservabilityConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter. `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = format!("{level},tower_http=info,sqlx=warn", level = config.log_level);
    EnvFilter::try_new(&directives).with_context(|| format!("invalid log filter '{directives}'"))
}

/// Installs the global subscriber, pretty or JSON per `log_format`.
pub fn init_telemetry(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };
    installed.context("failed to install tracing subscriber")?;

    tracing::info!(
        level = %config.log_level,
        format = %config.log_format,
        "Telemetry initialized"
    );
    Ok(())
}
