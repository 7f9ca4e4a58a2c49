//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use skein_core::{SkeinError, SkeinResult};
use std::path::PathBuf;
use tracing::{debug, info};

/// Conventional variables honoured on top of the prefixed ones.
const CONVENTIONAL_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("REDIS_URL", "redis.url"),
    ("JWT_SECRET", "security.jwt_secret"),
];

/// Layered configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    /// Default environment variable prefix.
    pub const DEFAULT_ENV_PREFIX: &'static str = "SKEIN";

    /// Creates a loader reading files from `config_dir`.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. built-in defaults
    /// 2. `{config_dir}/default.toml`
    /// 3. `{config_dir}/{environment}.toml`, environment from `SKEIN_ENV`
    /// 4. `{config_dir}/local.toml` (not committed to version control)
    /// 5. `SKEIN__SECTION__KEY` environment variables
    /// 6. `DATABASE_URL`, `REDIS_URL` and `JWT_SECRET`
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            env_prefix: Self::DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Loads configuration from the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Overrides the environment variable prefix.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Loads and validates the configuration.
    ///
    /// A missing signing key or any other invalid setting is a
    /// [`SkeinError::Configuration`]; callers treat it as fatal.
    pub fn load(&self) -> SkeinResult<AppConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let environment = std::env::var(format!("{}_ENV", self.env_prefix))
            .unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();
        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config file: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in CONVENTIONAL_ENV_OVERRIDES {
            builder = builder
                .set_override_option(*key, std::env::var(var).ok())
                .map_err(config_error_to_skein_error)?;
        }

        let mut app_config: AppConfig = builder
            .build()
            .map_err(config_error_to_skein_error)?
            .try_deserialize()
            .map_err(config_error_to_skein_error)?;
        app_config.app.environment = environment;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            SkeinError::Configuration(message)
        })?;

        Ok(app_config)
    }
}

fn config_error_to_skein_error(err: ConfigError) -> SkeinError {
    SkeinError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_files_are_layered() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[server]\nport = 9000\n[security]\njwt_secret = \"file-secret\"\n",
        );
        write(dir.path(), "local.toml", "[server]\nport = 9100\n");

        let config = ConfigLoader::new(dir.path())
            .with_env_prefix("SKEINTEST_LAYERS")
            .load()
            .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.security.jwt_secret, "file-secret");
        assert_eq!(config.cache.ttl_secs, 600);
    }

    #[test]
    fn test_env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[security]\njwt_secret = \"file-secret\"\n[cache]\nttl_secs = 60\n",
        );
        std::env::set_var("SKEINTEST_ENVVARS__CACHE__TTL_SECS", "120");

        let config = ConfigLoader::new(dir.path())
            .with_env_prefix("SKEINTEST_ENVVARS")
            .load()
            .unwrap();

        assert_eq!(config.cache.ttl_secs, 120);
        std::env::remove_var("SKEINTEST_ENVVARS__CACHE__TTL_SECS");
    }

    #[test]
    fn test_environment_file_is_selected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[security]\njwt_secret = \"s\"\n");
        write(dir.path(), "staging.toml", "[server]\nrequest_timeout_secs = 5\n");
        std::env::set_var("SKEINTEST_STAGE_ENV", "staging");

        let config = ConfigLoader::new(dir.path())
            .with_env_prefix("SKEINTEST_STAGE")
            .load()
            .unwrap();

        assert_eq!(config.app.environment, "staging");
        assert_eq!(config.server.request_timeout_secs, 5);
        std::env::remove_var("SKEINTEST_STAGE_ENV");
    }

    #[test]
    fn test_invalid_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[security]\njwt_secret = \"s\"\n[observability]\nlog_format = \"xml\"\n",
        );

        let err = ConfigLoader::new(dir.path())
            .with_env_prefix("SKEINTEST_INVALID")
            .load()
            .unwrap_err();

        assert!(matches!(err, SkeinError::Configuration(ref m) if m.contains("xml")));
    }
}
