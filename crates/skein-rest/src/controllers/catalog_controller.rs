//! Product and category controller.
//!
//! Reads are public; writes are admin-only (enforced by the router).

use crate::{
    extractors::{IdPath, JsonBody, QueryParams},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use skein_core::{Category, Page, Product};
use skein_service::{CategoryRequest, ProductListQuery, ProductRequest, ProductSearchQuery};
use tracing::debug;

pub async fn list_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProductListQuery>,
) -> ApiResult<Vec<Product>> {
    let response = state.product_service.list_products(query.category_id).await?;
    ok(response)
}

pub async fn search_products(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProductSearchQuery>,
) -> ApiResult<Page<Product>> {
    debug!(?query, "Product search request");

    let response = state.product_service.search_products(query).await?;
    ok(response)
}

pub async fn get_product(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<Product> {
    let response = state.product_service.get_product(id).await?;
    ok(response)
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    debug!("Create product request: {}", request.name);

    let response = state.product_service.create_product(request).await?;
    created(response)
}

pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<ProductRequest>,
) -> ApiResult<Product> {
    let response = state.product_service.update_product(id, request).await?;
    ok(response)
}

pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.product_service.delete_product(id).await?;
    no_content()
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let response = state.category_service.list_categories().await?;
    ok(response)
}

pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Category> {
    let response = state.category_service.get_category(id).await?;
    ok(response)
}

pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let response = state.category_service.create_category(request).await?;
    created(response)
}

pub async fn update_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<CategoryRequest>,
) -> ApiResult<Category> {
    let response = state.category_service.update_category(id, request).await?;
    ok(response)
}

pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.category_service.delete_category(id).await?;
    no_content()
}
