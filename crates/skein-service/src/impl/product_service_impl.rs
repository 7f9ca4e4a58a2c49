//! Product service implementation.

use crate::crud_service::CrudService;
use crate::dto::{ProductRequest, ProductSearchQuery};
use crate::product_service::ProductService;
use crate::rules;
use async_trait::async_trait;
use skein_core::{Page, Product, RecordId, ResultExt, SkeinError, SkeinResult};
use skein_repository::{
    CategoryRepository, CommentDao, CommentRepository, ProductDao, ProductFilter,
    ProductRepository,
};
use tracing::debug;

pub struct ProductServiceImpl {
    products: CrudService<Product, dyn ProductDao>,
    categories: CategoryRepository,
    /// Comments go with their product in the store; evicted here.
    comments: CommentRepository,
}

impl ProductServiceImpl {
    pub fn new(
        repository: ProductRepository,
        categories: CategoryRepository,
        comments: CommentRepository,
    ) -> Self {
        Self {
            products: CrudService::new(repository, rules::validate_product),
            categories,
            comments,
        }
    }

    /// Validates `product` and checks that its category exists.
    async fn check(&self, product: &Product) -> SkeinResult<()> {
        self.products.validate(product)?;
        match self.categories.get(product.category_id).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(SkeinError::validation(format!(
                "category {} does not exist",
                product.category_id
            ))),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn list_products(&self, category_id: Option<RecordId>) -> SkeinResult<Vec<Product>> {
        let Some(category_id) = category_id else {
            return self.products.list().await;
        };

        debug!("Listing products in category {}", category_id);
        let filter = ProductFilter {
            category_id: Some(category_id),
            ..Default::default()
        };
        self.products
            .repository()
            .dao()
            .find_by_filter(&filter)
            .await
            .with_context(|| format!("failed to list products in category {category_id}"))
    }

    async fn search_products(&self, query: ProductSearchQuery) -> SkeinResult<Page<Product>> {
        let page = query.page_request()?;
        let filter = query.filter();
        debug!(?filter, page = page.page, limit = page.limit, "Searching products");

        let result = self
            .products
            .repository()
            .dao()
            .search(&filter, page)
            .await
            .context("failed to search products")?;

        debug!("Search matched {} products", result.total_count);
        Ok(result)
    }

    async fn get_product(&self, id: RecordId) -> SkeinResult<Product> {
        self.products.get(id).await
    }

    async fn create_product(&self, request: ProductRequest) -> SkeinResult<Product> {
        let product = request.into_product();
        self.check(&product).await?;
        self.products.create(product).await
    }

    async fn update_product(&self, id: RecordId, request: ProductRequest) -> SkeinResult<Product> {
        let existing = self.products.get(id).await?;
        let product = request.apply_to(existing);
        self.check(&product).await?;
        self.products.update(product).await
    }

    async fn delete_product(&self, id: RecordId) -> SkeinResult<()> {
        let comment_ids: Vec<RecordId> = self
            .comments
            .dao()
            .list_by_product(id)
            .await
            .with_context(|| format!("failed to list comments of product {id}"))?
            .iter()
            .map(|comment| comment.id)
            .collect();

        self.products.delete(id).await?;
        self.comments.invalidate(&comment_ids).await;
        Ok(())
    }
}
