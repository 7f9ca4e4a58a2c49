//! PostgreSQL category DAO.

use crate::dao::{CategoryDao, RecordDao};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skein_core::{Category, RecordId, SkeinResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const CATEGORY_COLUMNS: &str = "id, name, category_type, created_at";

#[derive(Clone)]
pub struct PgCategoryDaoImpl {
    pool: Arc<DatabasePool>,
}

impl PgCategoryDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    category_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category_type: row.category_type,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RecordDao<Category> for PgCategoryDaoImpl {
    async fn insert(&self, category: &Category) -> SkeinResult<Category> {
        debug!("Inserting category {}", category.name);

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (name, category_type) VALUES ($1, $2) \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&category.name)
        .bind(&category.category_type)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> SkeinResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, category: &Category) -> SkeinResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories SET name = $1, category_type = $2 WHERE id = $3 \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&category.name)
        .bind(&category.category_type)
        .bind(category.id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: RecordId) -> SkeinResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl CategoryDao for PgCategoryDaoImpl {}
