//! PostgreSQL order DAO.

use crate::dao::{OrderDao, RecordDao};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use skein_core::{Order, RecordId, SkeinResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const ORDER_COLUMNS: &str = "id, user_id, total, status, created_at";

#[derive(Clone)]
pub struct PgOrderDaoImpl {
    pool: Arc<DatabasePool>,
}

impl PgOrderDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    total: Decimal,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            total: row.total,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RecordDao<Order> for PgOrderDaoImpl {
    async fn insert(&self, order: &Order) -> SkeinResult<Order> {
        debug!("Inserting order for user {}", order.user_id);

        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "INSERT INTO orders (user_id, total, status) VALUES ($1, $2, $3) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(order.user_id)
        .bind(order.total)
        .bind(&order.status)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> SkeinResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, order: &Order) -> SkeinResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE orders SET total = $1, status = $2 WHERE id = $3 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(order.total)
        .bind(&order.status)
        .bind(order.id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: RecordId) -> SkeinResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl OrderDao for PgOrderDaoImpl {
    async fn list_by_user(&self, user_id: RecordId) -> SkeinResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
