//! Cache stores backing the cache-aside engine.
//!
//! Values are JSON snapshots of entities keyed by `"{resource}:{id}"`. A store
//! is only an accelerator: every error it returns is logged by the engine and
//! treated as a miss or a no-op.

mod cache_store;
#[cfg(any(test, feature = "memory"))]
mod memory_cache;
mod redis_cache;

pub use cache_store::CacheStore;
#[cfg(any(test, feature = "memory"))]
pub use memory_cache::{InMemoryCache, UnavailableCache};
pub use redis_cache::{create_redis_pool, RedisCache};
