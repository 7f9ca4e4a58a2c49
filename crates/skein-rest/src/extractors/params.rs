//! Path, query and body extractors with JSON error responses.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use skein_core::{RecordId, SkeinError};

/// Integer record id taken from the `:id` path segment.
///
/// A non-integer segment is a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError(SkeinError::validation(e.body_text())))?;

        raw.parse::<RecordId>()
            .map(IdPath)
            .map_err(|_| AppError(SkeinError::validation(format!("Invalid id: {raw}"))))
    }
}

/// Query string deserialized into `T`; any failure is a 400.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| QueryParams(value))
            .map_err(|e| AppError(SkeinError::validation(e.body_text())))
    }
}

/// JSON request body; malformed, mistyped or missing JSON is a 400.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| JsonBody(value))
            .map_err(|e| {
                AppError(SkeinError::validation(format!("Invalid JSON: {}", e.body_text())))
            })
    }
}
