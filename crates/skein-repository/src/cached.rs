//! Generic cache-aside repository.
//!
//! One engine serves every resource type. Reads try the cache first and fall
//! back to the DAO; writes go to the DAO and then evict the cached snapshot.
//! The cache is never written by a mutation and is never the system of
//! record: any cache failure is logged and treated as a miss or a no-op.

use crate::cache::CacheStore;
use crate::dao::RecordDao;
use skein_core::{RecordId, Resource, ResultExt, SkeinError, SkeinResult};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache-aside repository over a DAO of type `D` for resource `T`.
///
/// `D` may be a trait object such as `dyn ProductDao`, which keeps the
/// resource-specific queries reachable through [`CachedRepository::dao`].
pub struct CachedRepository<T, D: ?Sized> {
    dao: Arc<D>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
    _resource: PhantomData<fn() -> T>,
}

impl<T, D> CachedRepository<T, D>
where
    T: Resource,
    D: ?Sized + RecordDao<T>,
{
    #[must_use]
    pub fn new(dao: Arc<D>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            dao,
            cache,
            ttl,
            _resource: PhantomData,
        }
    }

    /// Returns the underlying DAO for uncached queries.
    #[must_use]
    pub fn dao(&self) -> &D {
        &self.dao
    }

    /// Fetches a record by id, serving from the cache when possible.
    pub async fn get(&self, id: RecordId) -> SkeinResult<T> {
        let key = T::cache_key(id);

        if let Some(record) = self.read_cache(&key).await {
            return Ok(record);
        }

        let record = self
            .dao
            .find_by_id(id)
            .await
            .with_context(|| format!("{} repository: get {id}", T::NAME))?
            .ok_or_else(|| {
                SkeinError::not_found(T::NAME, id)
                    .context(format!("{} repository: get {id}", T::NAME))
            })?;

        self.populate(&key, &record).await;
        Ok(record)
    }

    /// Lists every record straight from the store.
    pub async fn list(&self) -> SkeinResult<Vec<T>> {
        self.dao
            .find_all()
            .await
            .with_context(|| format!("{} repository: list", T::NAME))
    }

    /// Inserts a record. Nothing is cached for a brand-new key.
    pub async fn create(&self, record: &T) -> SkeinResult<T> {
        let created = self
            .dao
            .insert(record)
            .await
            .with_context(|| format!("{} repository: create", T::NAME))?;
        debug!("Created {} {}", T::NAME, created.id());
        Ok(created)
    }

    /// Updates a record and evicts its cached snapshot.
    ///
    /// The next `get` repopulates the cache lazily.
    pub async fn update(&self, record: &T) -> SkeinResult<T> {
        let id = record.id();
        let updated = self
            .dao
            .update(record)
            .await
            .with_context(|| format!("{} repository: update {id}", T::NAME))?
            .ok_or_else(|| {
                SkeinError::not_found(T::NAME, id)
                    .context(format!("{} repository: update {id}", T::NAME))
            })?;

        self.evict(&T::cache_key(id)).await;
        Ok(updated)
    }

    /// Deletes a record and evicts its cached snapshot.
    pub async fn delete(&self, id: RecordId) -> SkeinResult<()> {
        let deleted = self
            .dao
            .delete(id)
            .await
            .with_context(|| format!("{} repository: delete {id}", T::NAME))?;
        if !deleted {
            return Err(SkeinError::not_found(T::NAME, id)
                .context(format!("{} repository: delete {id}", T::NAME)));
        }

        self.evict(&T::cache_key(id)).await;
        Ok(())
    }

    /// Evicts the cached snapshots of records the store removed on its own,
    /// such as rows dropped by a cascading delete.
    pub async fn invalidate(&self, ids: &[RecordId]) {
        for id in ids {
            self.evict(&T::cache_key(*id)).await;
        }
        if !ids.is_empty() {
            debug!("Invalidated {} cached {} entries", ids.len(), T::NAME);
        }
    }

    async fn read_cache(&self, key: &str) -> Option<T> {
        match self.cache.get_raw(key).await {
            Ok(Some(json)) => match serde_json::from_str::<T>(&json) {
                Ok(record) => {
                    debug!("Cache hit for key '{}'", key);
                    metrics::counter!("cache_hits_total", "resource" => T::NAME).increment(1);
                    Some(record)
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry '{}': {}", key, e);
                    metrics::counter!("cache_errors_total", "resource" => T::NAME).increment(1);
                    None
                }
            },
            Ok(None) => {
                debug!("Cache miss for key '{}'", key);
                metrics::counter!("cache_misses_total", "resource" => T::NAME).increment(1);
                None
            }
            Err(e) => {
                warn!("Cache read failed for key '{}': {}", key, e);
                metrics::counter!("cache_errors_total", "resource" => T::NAME).increment(1);
                None
            }
        }
    }

    async fn populate(&self, key: &str, record: &T) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize '{}' for caching: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set_raw(key, &json, self.ttl).await {
            warn!("Cache write failed for key '{}': {}", key, e);
            metrics::counter!("cache_errors_total", "resource" => T::NAME).increment(1);
        }
    }

    async fn evict(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!("Cache eviction failed for key '{}': {}", key, e);
            metrics::counter!("cache_errors_total", "resource" => T::NAME).increment(1);
        }
    }
}

impl<T, D: ?Sized> Clone for CachedRepository<T, D> {
    fn clone(&self) -> Self {
        Self {
            dao: Arc::clone(&self.dao),
            cache: Arc::clone(&self.cache),
            ttl: self.ttl,
            _resource: PhantomData,
        }
    }
}

impl<T: Resource, D: ?Sized> std::fmt::Debug for CachedRepository<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedRepository")
            .field("resource", &T::NAME)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
