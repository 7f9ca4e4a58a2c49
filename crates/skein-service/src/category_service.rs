//! Category service trait definition.

use crate::dto::CategoryRequest;
use async_trait::async_trait;
use skein_core::{Category, RecordId, SkeinResult};

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list_categories(&self) -> SkeinResult<Vec<Category>>;

    async fn get_category(&self, id: RecordId) -> SkeinResult<Category>;

    async fn create_category(&self, request: CategoryRequest) -> SkeinResult<Category>;

    async fn update_category(
        &self,
        id: RecordId,
        request: CategoryRequest,
    ) -> SkeinResult<Category>;

    async fn delete_category(&self, id: RecordId) -> SkeinResult<()>;
}
