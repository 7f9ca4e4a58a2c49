//! Per-request correlation id.

use axum::{
    body::Body,
    http::{header::CONTENT_LENGTH, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use skein_core::ErrorResponse;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

/// Response and request header carrying the correlation id.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Typed request-scoped metadata, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

/// Assigns a correlation id, runs the rest of the pipeline inside a span that
/// carries it, and echoes it back in `x-request-id` and in error bodies.
pub async fn request_context_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    request.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    let mut response = next.run(request).instrument(span).await;

    if let Some(error) = response.extensions_mut().remove::<ErrorResponse>() {
        match serde_json::to_vec(&error.with_trace_id(request_id.clone())) {
            Ok(body) => {
                response.headers_mut().remove(CONTENT_LENGTH);
                *response.body_mut() = Body::from(body);
            }
            Err(e) => warn!("Failed to attach trace id to error body: {}", e),
        }
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}
