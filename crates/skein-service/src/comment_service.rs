//! Comment service trait definition.

use crate::dto::{CreateCommentRequest, UpdateCommentRequest};
use async_trait::async_trait;
use skein_core::{Comment, RecordId, SkeinResult};
use skein_security::Principal;

/// Product comments. Reading is public; editing and deleting is limited to
/// the author or an administrator.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Lists comments, optionally for one product.
    async fn list_comments(&self, product_id: Option<RecordId>) -> SkeinResult<Vec<Comment>>;

    async fn get_comment(&self, id: RecordId) -> SkeinResult<Comment>;

    /// Posts a comment authored by the caller.
    async fn create_comment(
        &self,
        principal: &Principal,
        request: CreateCommentRequest,
    ) -> SkeinResult<Comment>;

    async fn update_comment(
        &self,
        principal: &Principal,
        id: RecordId,
        request: UpdateCommentRequest,
    ) -> SkeinResult<Comment>;

    async fn delete_comment(&self, principal: &Principal, id: RecordId) -> SkeinResult<()>;
}
