//! PostgreSQL product DAO.

use crate::dao::{ProductDao, ProductFilter, RecordDao};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use skein_core::{Page, PageRequest, Product, RecordId, SkeinResult};
use sqlx::{FromRow, Postgres, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

const PRODUCT_COLUMNS: &str = "id, name, description, price, category_id, product_type, \
     composition, origin, length, size, garment_length, color, image_url, created_at";

#[derive(Clone)]
pub struct PgProductDaoImpl {
    pool: Arc<DatabasePool>,
}

impl PgProductDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    category_id: i64,
    product_type: String,
    composition: Option<String>,
    origin: Option<String>,
    length: Option<i32>,
    size: Option<String>,
    garment_length: Option<i32>,
    color: Option<String>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id,
            product_type: row.product_type,
            composition: row.composition,
            origin: row.origin,
            length: row.length,
            size: row.size,
            garment_length: row.garment_length,
            color: row.color,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// Escapes `LIKE` wildcards so user input matches literally.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Appends the `WHERE` clause for `filter`.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    builder.push(" WHERE TRUE");
    if let Some(name) = &filter.name {
        builder
            .push(" AND name ILIKE ")
            .push_bind(format!("%{}%", escape_like(name)));
    }
    if let Some(product_type) = &filter.product_type {
        builder
            .push(" AND product_type = ")
            .push_bind(product_type.clone());
    }
    if let Some(category_id) = filter.category_id {
        builder.push(" AND category_id = ").push_bind(category_id);
    }
    if let Some(color) = &filter.color {
        builder
            .push(" AND LOWER(color) = LOWER(")
            .push_bind(color.clone())
            .push(")");
    }
}

#[async_trait]
impl RecordDao<Product> for PgProductDaoImpl {
    async fn insert(&self, product: &Product) -> SkeinResult<Product> {
        debug!("Inserting product {}", product.name);

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (name, description, price, category_id, product_type, \
             composition, origin, length, size, garment_length, color, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id)
        .bind(&product.product_type)
        .bind(&product.composition)
        .bind(&product.origin)
        .bind(product.length)
        .bind(&product.size)
        .bind(product.garment_length)
        .bind(&product.color)
        .bind(&product.image_url)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> SkeinResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, product: &Product) -> SkeinResult<Option<Product>> {
        debug!("Updating product {}", product.id);

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET name = $1, description = $2, price = $3, category_id = $4, \
             product_type = $5, composition = $6, origin = $7, length = $8, size = $9, \
             garment_length = $10, color = $11, image_url = $12 \
             WHERE id = $13 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id)
        .bind(&product.product_type)
        .bind(&product.composition)
        .bind(&product.origin)
        .bind(product.length)
        .bind(&product.size)
        .bind(product.garment_length)
        .bind(&product.color)
        .bind(&product.image_url)
        .bind(product.id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: RecordId) -> SkeinResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProductDao for PgProductDaoImpl {
    async fn find_by_filter(&self, filter: &ProductFilter) -> SkeinResult<Vec<Product>> {
        let mut query =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        push_filters(&mut query, filter);
        query.push(" ORDER BY id");
        let rows = query
            .build_query_as::<ProductRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> SkeinResult<Page<Product>> {
        debug!(?filter, page = page.page, limit = page.limit, "Searching products");

        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.inner())
            .await?;

        let mut page_query =
            QueryBuilder::<Postgres>::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
        push_filters(&mut page_query, filter);
        page_query
            .push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
        let rows: Vec<ProductRow> = page_query
            .build_query_as::<ProductRow>()
            .fetch_all(self.pool.inner())
            .await?;

        let items = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(items, page, u64::try_from(total).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%_wool\\"), "100\\%\\_wool\\\\");
        assert_eq!(escape_like("merino"), "merino");
    }

    #[test]
    fn test_filters_build_parameterized_sql() {
        let filter = ProductFilter {
            name: Some("mer".to_string()),
            product_type: Some("yarn".to_string()),
            category_id: Some(3),
            color: Some("Red".to_string()),
        };
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut builder, &filter);

        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM products WHERE TRUE AND name ILIKE $1 \
             AND product_type = $2 AND category_id = $3 AND LOWER(color) = LOWER($4)"
        );
    }

    #[test]
    fn test_empty_filter_adds_no_conditions() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filters(&mut builder, &ProductFilter::default());
        assert_eq!(builder.sql(), "SELECT COUNT(*) FROM products WHERE TRUE");
    }
}
