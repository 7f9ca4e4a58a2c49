//! Order controller. Every route requires a bearer token; ownership is
//! checked by the service.

use crate::{
    extractors::{AuthenticatedUser, IdPath, JsonBody},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use skein_core::Order;
use skein_service::{CreateOrderRequest, UpdateOrderRequest};
use tracing::debug;

pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Vec<Order>> {
    let response = state.order_service.list_orders(&user).await?;
    ok(response)
}

pub async fn get_order(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> ApiResult<Order> {
    let response = state.order_service.get_order(&user, id).await?;
    ok(response)
}

pub async fn create_order(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    debug!("Create order request from user {}", user.user_id);

    let response = state.order_service.create_order(&user, request).await?;
    created(response)
}

pub async fn update_order(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateOrderRequest>,
) -> ApiResult<Order> {
    let response = state.order_service.update_order(&user, id, request).await?;
    ok(response)
}

pub async fn delete_order(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.order_service.delete_order(&user, id).await?;
    no_content()
}
