//! Authenticated principal extractor.

use crate::responses::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use skein_core::SkeinError;
use skein_security::Principal;

/// The caller's verified identity.
///
/// Present only on routes behind [`require_auth`](crate::middleware::require_auth),
/// which puts the [`Principal`] into the request extensions.
pub struct AuthenticatedUser(pub Principal);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError(SkeinError::unauthorized("Authentication required")))
    }
}
