//! Shared fixtures for service tests.

use skein_core::{RecordId, UserRole};
use skein_repository::{CacheStore, InMemoryCache, Repositories};
use skein_security::Principal;
use std::sync::Arc;
use std::time::Duration;

pub fn repositories() -> Repositories {
    repositories_with_cache().0
}

/// In-memory repositories plus a handle on their shared cache.
pub fn repositories_with_cache() -> (Repositories, Arc<InMemoryCache>) {
    let cache = Arc::new(InMemoryCache::new());
    let repositories = Repositories::in_memory(
        Arc::clone(&cache) as Arc<dyn CacheStore>,
        Duration::from_secs(600),
    );
    (repositories, cache)
}

pub fn user(id: RecordId) -> Principal {
    Principal::new(id, format!("user{id}@x.com"), UserRole::User)
}

pub fn admin(id: RecordId) -> Principal {
    Principal::new(id, format!("admin{id}@x.com"), UserRole::Admin)
}
