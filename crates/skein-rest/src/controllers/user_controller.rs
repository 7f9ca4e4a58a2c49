//! User management controller. Every route is admin-only.

use crate::{
    extractors::{IdPath, JsonBody},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use skein_service::{CreateUserRequest, UpdateUserRequest, UserResponse};
use tracing::debug;

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let response = state.user_service.list_users().await?;
    ok(response)
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Create user request: {}", request.email);

    let response = state.user_service.create_user(request).await?;
    created(response)
}

pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<UserResponse> {
    let response = state.user_service.get_user(id).await?;
    ok(response)
}

pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", id);

    let response = state.user_service.update_user(id, request).await?;
    ok(response)
}

pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    state.user_service.delete_user(id).await?;
    no_content()
}
