//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use skein_core::{ErrorResponse, SkeinError};
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub SkeinError);

impl From<SkeinError> for AppError {
    fn from(err: SkeinError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        }

        let body = ErrorResponse::from_error(&self.0);
        let mut response = (status, Json(&body)).into_response();
        // Picked up by the request context middleware to stamp the trace id.
        response.extensions_mut().insert(body);
        response
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> Result<(StatusCode, Json<T>), AppError> {
    Ok((StatusCode::CREATED, Json(data)))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> Result<StatusCode, AppError> {
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_root_cause() {
        let err = SkeinError::not_found("product", 42).context("failed to load product 42");
        let response = AppError(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.code, "NOT_FOUND");
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = SkeinError::Database("password=hunter2".to_string());
        let response = AppError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert!(!body.message.contains("hunter2"));
    }
}
