//! Product service trait definition.

use crate::dto::{ProductRequest, ProductSearchQuery};
use async_trait::async_trait;
use skein_core::{Page, Product, RecordId, SkeinResult};

/// Catalog operations.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Lists products, optionally restricted to one category.
    async fn list_products(&self, category_id: Option<RecordId>) -> SkeinResult<Vec<Product>>;

    /// Searches by name, type, category and color, one page at a time.
    async fn search_products(&self, query: ProductSearchQuery) -> SkeinResult<Page<Product>>;

    /// Gets a product by ID.
    async fn get_product(&self, id: RecordId) -> SkeinResult<Product>;

    async fn create_product(&self, request: ProductRequest) -> SkeinResult<Product>;

    /// Replaces a product's fields.
    async fn update_product(&self, id: RecordId, request: ProductRequest) -> SkeinResult<Product>;

    async fn delete_product(&self, id: RecordId) -> SkeinResult<()>;
}
