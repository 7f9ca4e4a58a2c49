//! Primary-key data access shared by every resource.

use async_trait::async_trait;
use skein_core::{RecordId, Resource, SkeinResult};

/// Single-statement CRUD against the authoritative store.
///
/// "No row" is reported as `None` / `false`, never as an error, so the
/// engine can distinguish a missing record from a failing store.
#[async_trait]
pub trait RecordDao<T: Resource>: Send + Sync {
    /// Inserts a record and returns it with its store-generated id.
    async fn insert(&self, record: &T) -> SkeinResult<T>;

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<T>>;

    /// Returns every record ordered by id.
    async fn find_all(&self) -> SkeinResult<Vec<T>>;

    /// Updates the record with `record.id()`. Returns `None` if no row matched.
    async fn update(&self, record: &T) -> SkeinResult<Option<T>>;

    /// Deletes by id. Returns `true` if a row was removed.
    async fn delete(&self, id: RecordId) -> SkeinResult<bool>;
}
