//! Comment data access.

use super::RecordDao;
use async_trait::async_trait;
use skein_core::{Comment, RecordId, SkeinResult};

#[async_trait]
pub trait CommentDao: RecordDao<Comment> {
    /// Lists the comments on one product, ordered by id.
    async fn list_by_product(&self, product_id: RecordId) -> SkeinResult<Vec<Comment>>;

    /// Lists the comments written by one account, ordered by id.
    async fn list_by_user(&self, user_id: RecordId) -> SkeinResult<Vec<Comment>>;
}
