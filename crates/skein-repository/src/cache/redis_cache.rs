//! Redis-based cache store.

use super::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use skein_config::RedisConfig;
use skein_core::{HealthCheck, HealthStatus, SkeinError, SkeinResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builds a Redis connection pool from configuration.
///
/// Returns `None` when Redis is disabled. The pool connects lazily, so an
/// unreachable server surfaces on first use, not here.
pub fn create_redis_pool(config: &RedisConfig) -> SkeinResult<Option<Arc<Pool>>> {
    if !config.enabled {
        return Ok(None);
    }

    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(PoolConfig::new(config.pool_size as usize));
    let pool = redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| SkeinError::Cache(format!("Failed to create Redis pool: {e}")))?;

    Ok(Some(Arc::new(pool)))
}

/// Redis cache store.
#[derive(Clone)]
pub struct RedisCache {
    pool: Option<Arc<Pool>>,
}

impl RedisCache {
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a no-op store: every read misses, every write is dropped.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> SkeinResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| SkeinError::Cache(format!("Failed to get Redis connection: {e}"))),
            None => Err(SkeinError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get_raw(&self, key: &str) -> SkeinResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| SkeinError::Cache(format!("Failed to get key '{key}': {e}")))?;

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SkeinResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| SkeinError::Cache(format!("Failed to set key '{key}': {e}")))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> SkeinResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| SkeinError::Cache(format!("Failed to delete key '{key}': {e}")))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }
}

#[async_trait]
impl HealthCheck for RedisCache {
    fn name(&self) -> &str {
        "cache"
    }

    /// A broken cache only degrades the service; reads fall through to the store.
    async fn check(&self) -> HealthStatus {
        if !self.is_enabled() {
            return HealthStatus::Degraded("disabled".to_string());
        }

        let ping = async {
            let mut conn = self.get_conn().await?;
            deadpool_redis::redis::cmd("PING")
                .query_async::<String>(&mut conn)
                .await
                .map_err(|e| SkeinError::Cache(format!("PING failed: {e}")))
        };

        match ping.await {
            Ok(_) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Degraded(e.to_string()),
        }
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_cache_is_a_no_op() {
        let cache = RedisCache::disabled();
        assert!(!cache.is_enabled());
        assert_eq!(cache.get_raw("product:1").await.unwrap(), None);
        cache
            .set_raw("product:1", "{}", Duration::from_secs(60))
            .await
            .unwrap();
        assert!(!cache.delete("product:1").await.unwrap());
        assert_eq!(cache.check().await.label(), "degraded");
    }

    #[test]
    fn test_pool_not_created_when_disabled() {
        let config = RedisConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(create_redis_pool(&config).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pool_is_lazy() {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        assert!(create_redis_pool(&config).unwrap().is_some());
    }
}
