//! CORS headers.
//!
//! `tower_http::cors::CorsLayer` only sends the allowed methods and headers
//! on preflight responses; here they go on every response.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS, PUT, DELETE";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS policy: one configured origin, credentials allowed.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_origin: Arc<HeaderValue>,
}

impl CorsPolicy {
    /// Falls back to `*` if the configured origin is not a valid header value.
    #[must_use]
    pub fn new(allowed_origin: &str) -> Self {
        let allow_origin =
            HeaderValue::from_str(allowed_origin).unwrap_or_else(|_| HeaderValue::from_static("*"));
        Self {
            allow_origin: Arc::new(allow_origin),
        }
    }

    fn apply(&self, response: &mut Response) {
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin.as_ref().clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

/// Sets the CORS headers on every response. `OPTIONS` requests end here
/// with an empty 200 and never reach authentication.
pub async fn cors_middleware(
    State(policy): State<CorsPolicy>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };
    policy.apply(&mut response);
    response
}
