//! Application assembly.
//!
//! Wires the stores, services and router from an [`AppConfig`] and runs the
//! HTTP server until a shutdown signal arrives.

use anyhow::Context;
use axum::Router;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use skein_config::{AppConfig, SecurityConfig};
use skein_core::HealthCheck;
use skein_repository::{
    create_pool, create_redis_pool, CacheStore, DatabasePool, RedisCache, Repositories,
};
use skein_rest::{create_router, AppState};
use skein_security::{PasswordHasher, TokenProvider};
use skein_service::Services;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

/// A fully wired server, ready to run.
pub struct Application {
    config: AppConfig,
    router: Router,
    pool: Arc<DatabasePool>,
}

impl Application {
    /// Connects the stores and builds the router.
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database)
            .await
            .context("failed to connect to the database")?;
        if config.database.run_migrations {
            pool.run_migrations()
                .await
                .context("failed to run database migrations")?;
        }

        let cache = match create_redis_pool(&config.redis).context("failed to configure Redis")? {
            Some(redis) => RedisCache::new(redis),
            None => {
                warn!("Redis is disabled; every read goes to the database");
                RedisCache::disabled()
            }
        };
        let cache = Arc::new(cache);

        let repositories = Repositories::postgres(
            &pool,
            Arc::clone(&cache) as Arc<dyn CacheStore>,
            config.cache.ttl(),
        );

        let mut state = assemble_state(&repositories, &config.security)?
            .with_health_check(Arc::clone(&pool) as Arc<dyn HealthCheck>)
            .with_health_check(cache as Arc<dyn HealthCheck>);
        if config.observability.metrics_enabled {
            state = state.with_metrics(install_metrics()?);
        }

        let router = create_router(state, &config.server);
        Ok(Self {
            config,
            router,
            pool,
        })
    }

    /// Serves requests until Ctrl+C or SIGTERM, then closes the pool.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("Listening on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        self.pool.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

/// Builds the services and HTTP state on top of `repositories`.
pub fn assemble_state(
    repositories: &Repositories,
    security: &SecurityConfig,
) -> anyhow::Result<AppState> {
    let token_provider =
        TokenProvider::new(security).context("failed to initialize the token provider")?;
    let services = Services::new(
        repositories,
        Arc::new(PasswordHasher::new()),
        Arc::new(token_provider),
    );
    Ok(AppState::new(services))
}

fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install the Prometheus recorder")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_repository::InMemoryCache;
    use std::time::Duration;

    fn repositories() -> Repositories {
        Repositories::in_memory(
            Arc::new(InMemoryCache::new()) as Arc<dyn CacheStore>,
            Duration::from_secs(600),
        )
    }

    #[test]
    fn test_missing_signing_key_is_fatal() {
        let Err(err) = assemble_state(&repositories(), &SecurityConfig::default()) else {
            panic!("an empty signing key must be rejected");
        };
        assert!(err.to_string().contains("token provider"));
    }

    #[test]
    fn test_state_assembles_with_a_key() {
        let security = SecurityConfig {
            jwt_secret: "secret".to_string(),
            ..SecurityConfig::default()
        };
        let state = assemble_state(&repositories(), &security).unwrap();
        assert!(state.health_checks.is_empty());
        assert!(state.metrics.is_none());
    }
}
