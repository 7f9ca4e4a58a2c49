//! Authentication controller.

use crate::{
    extractors::{AuthenticatedUser, JsonBody},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use skein_service::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use tracing::debug;

/// Register a new account.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Registration request for: {}", request.email);

    let response = state.auth_service.register(request).await?;
    created(response)
}

/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<LoginResponse> {
    debug!("Login request for: {}", request.email);

    let response = state.auth_service.login(request).await?;
    ok(response)
}

/// Get the current authenticated user.
pub async fn me(State(state): State<AppState>, user: AuthenticatedUser) -> ApiResult<UserResponse> {
    let response = state.auth_service.current_user(&user).await?;
    ok(response)
}
