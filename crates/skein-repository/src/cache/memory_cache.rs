//! In-process cache stores.

use super::CacheStore;
use async_trait::async_trait;
use parking_lot::Mutex;
use skein_core::{SkeinError, SkeinResult};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Map-backed store honouring TTLs, for tests and single-process runs.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a live entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .get(key)
            .is_some_and(|(_, expires_at)| *expires_at > Instant::now())
    }

    /// Overwrites an entry without a TTL check, e.g. to plant a corrupt value.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.lock().insert(
            key.to_string(),
            (value.to_string(), Instant::now() + Duration::from_secs(3600)),
        );
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get_raw(&self, key: &str) -> SkeinResult<Option<String>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SkeinResult<()> {
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> SkeinResult<bool> {
        Ok(self.entries.lock().remove(key).is_some())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// A store whose every call fails, standing in for an unreachable server.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableCache;

#[async_trait]
impl CacheStore for UnavailableCache {
    async fn get_raw(&self, _key: &str) -> SkeinResult<Option<String>> {
        Err(SkeinError::Cache("connection refused".to_string()))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> SkeinResult<()> {
        Err(SkeinError::Cache("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> SkeinResult<bool> {
        Err(SkeinError::Cache("connection refused".to_string()))
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
