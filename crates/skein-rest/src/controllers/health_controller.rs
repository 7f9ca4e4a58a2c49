//! Health and metrics controller.

use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::future::join_all;
use serde::Serialize;
use skein_core::HealthStatus;
use std::collections::BTreeMap;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness response with one entry per dependency.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: BTreeMap<String, ComponentHealth>,
}

#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check endpoint.
///
/// Answers 503 only when a dependency is down. A degraded cache still
/// serves traffic because every read falls through to the database.
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let statuses = join_all(state.health_checks.iter().map(|check| async move {
        (check.name().to_string(), check.check().await)
    }))
    .await;

    let ready = statuses.iter().all(|(_, status)| !status.is_unhealthy());
    let checks = statuses
        .into_iter()
        .map(|(name, status)| {
            let message = match &status {
                HealthStatus::Healthy => None,
                HealthStatus::Degraded(reason)
                | HealthStatus::Unhealthy(reason) => Some(reason.clone()),
            };
            let component = ComponentHealth {
                status: status.label(),
                message,
            };
            (name, component)
        })
        .collect();

    let (code, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };
    (
        code,
        Json(ReadinessResponse {
            status: label,
            checks,
        }),
    )
        .into_response()
}

/// Prometheus scrape endpoint.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
