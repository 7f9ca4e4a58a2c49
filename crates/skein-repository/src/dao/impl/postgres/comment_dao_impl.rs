//! PostgreSQL comment DAO.

use crate::dao::{CommentDao, RecordDao};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skein_core::{Comment, RecordId, SkeinResult};
use sqlx::FromRow;
use std::sync::Arc;

const COMMENT_COLUMNS: &str = "id, product_id, user_id, body, created_at";

#[derive(Clone)]
pub struct PgCommentDaoImpl {
    pool: Arc<DatabasePool>,
}

impl PgCommentDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    product_id: i64,
    user_id: i64,
    body: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            user_id: row.user_id,
            text: row.body,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RecordDao<Comment> for PgCommentDaoImpl {
    async fn insert(&self, comment: &Comment) -> SkeinResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (product_id, user_id, body) VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(comment.product_id)
        .bind(comment.user_id)
        .bind(&comment.text)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> SkeinResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Only the body is editable; product and author are fixed at creation.
    async fn update(&self, comment: &Comment) -> SkeinResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET body = $1 WHERE id = $2 RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(&comment.text)
        .bind(comment.id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: RecordId) -> SkeinResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CommentDao for PgCommentDaoImpl {
    async fn list_by_product(&self, product_id: RecordId) -> SkeinResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE product_id = $1 ORDER BY id"
        ))
        .bind(product_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, user_id: RecordId) -> SkeinResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
