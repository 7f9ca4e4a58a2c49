//! Authentication and authorization middleware.

use crate::responses::AppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use skein_core::SkeinError;
use skein_security::Principal;
use tracing::debug;

/// Middleware that requires a valid bearer token.
///
/// On success the caller's [`Principal`] is added to the request extensions;
/// otherwise the request stops with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return AppError(SkeinError::unauthorized("Authorization header is required"))
            .into_response();
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());
    let Some(token) = token else {
        return AppError(SkeinError::unauthorized("Invalid Authorization header format"))
            .into_response();
    };

    match state.auth_service.authenticate(token) {
        Ok(principal) => {
            debug!(user_id = principal.user_id, role = %principal.role, "Authenticated");
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(e) => AppError(e).into_response(),
    }
}

/// Middleware that requires the administrator role.
///
/// Must sit inside [`require_auth`]; the role is only trusted once the token
/// has been verified.
pub async fn require_admin(request: Request<Body>, next: Next) -> Response {
    let checked = match request.extensions().get::<Principal>() {
        Some(principal) => principal.require_admin(),
        None => Err(SkeinError::unauthorized("Authentication required")),
    };

    match checked {
        Ok(()) => next.run(request).await,
        Err(e) => {
            debug!("Admin gate rejected request: {}", e);
            AppError(e).into_response()
        }
    }
}
