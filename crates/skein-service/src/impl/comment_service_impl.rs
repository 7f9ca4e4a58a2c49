//! Comment service implementation.

use crate::comment_service::CommentService;
use crate::crud_service::CrudService;
use crate::dto::{CreateCommentRequest, UpdateCommentRequest};
use crate::rules;
use async_trait::async_trait;
use chrono::Utc;
use skein_core::{Comment, RecordId, ResultExt, SkeinError, SkeinResult};
use skein_repository::{CommentDao, CommentRepository, ProductRepository};
use skein_security::Principal;
use tracing::warn;

pub struct CommentServiceImpl {
    comments: CrudService<Comment, dyn CommentDao>,
    products: ProductRepository,
}

impl CommentServiceImpl {
    pub fn new(repository: CommentRepository, products: ProductRepository) -> Self {
        Self {
            comments: CrudService::new(repository, rules::validate_comment),
            products,
        }
    }

    async fn load_owned(&self, principal: &Principal, id: RecordId) -> SkeinResult<Comment> {
        let comment = self.comments.get(id).await?;
        if let Err(e) = principal.require_owner_or_admin(comment.user_id) {
            warn!("User {} denied access to comment {}", principal.user_id, id);
            return Err(e);
        }
        Ok(comment)
    }
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn list_comments(&self, product_id: Option<RecordId>) -> SkeinResult<Vec<Comment>> {
        match product_id {
            Some(product_id) => self
                .comments
                .repository()
                .dao()
                .list_by_product(product_id)
                .await
                .with_context(|| format!("failed to list comments of product {product_id}")),
            None => self.comments.list().await,
        }
    }

    async fn get_comment(&self, id: RecordId) -> SkeinResult<Comment> {
        self.comments.get(id).await
    }

    async fn create_comment(
        &self,
        principal: &Principal,
        request: CreateCommentRequest,
    ) -> SkeinResult<Comment> {
        let comment = Comment {
            id: 0,
            product_id: request.product_id,
            user_id: principal.user_id,
            text: request.text,
            created_at: Utc::now(),
        };
        self.comments.validate(&comment)?;

        if let Err(e) = self.products.get(comment.product_id).await {
            return Err(if e.is_not_found() {
                SkeinError::validation(format!("product {} does not exist", comment.product_id))
            } else {
                e
            });
        }

        self.comments.create(comment).await
    }

    async fn update_comment(
        &self,
        principal: &Principal,
        id: RecordId,
        request: UpdateCommentRequest,
    ) -> SkeinResult<Comment> {
        let mut comment = self.load_owned(principal, id).await?;
        comment.text = request.text;
        self.comments.update(comment).await
    }

    async fn delete_comment(&self, principal: &Principal, id: RecordId) -> SkeinResult<()> {
        self.load_owned(principal, id).await?;
        self.comments.delete(id).await
    }
}
