//! Cache store trait.

use async_trait::async_trait;
use skein_core::SkeinResult;
use std::time::Duration;

/// Byte-level cache contract: `GET key`, `SET key value TTL`, `DEL key`.
///
/// Values are stored as JSON strings so the trait stays dyn-compatible;
/// typing happens in [`crate::CachedRepository`].
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the raw value, or `None` on a miss or an expired entry.
    async fn get_raw(&self, key: &str) -> SkeinResult<Option<String>>;

    /// Stores a raw value with a time-to-live.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> SkeinResult<()>;

    /// Deletes a value. Returns `true` if the key existed.
    async fn delete(&self, key: &str) -> SkeinResult<bool>;

    /// Returns false for a store that was configured off.
    fn is_enabled(&self) -> bool;
}
