//! Application state for Axum handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use skein_core::HealthCheck;
use skein_service::{
    AuthService, CategoryService, CommentService, OrderService, ProductService, Services,
    UserService,
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub product_service: Arc<dyn ProductService>,
    pub category_service: Arc<dyn CategoryService>,
    pub order_service: Arc<dyn OrderService>,
    pub comment_service: Arc<dyn CommentService>,
    /// Dependencies reported by `/health/ready`.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
    /// Renders `/metrics`; `None` when metrics are disabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(services: Services) -> Self {
        Self {
            auth_service: services.auth,
            user_service: services.users,
            product_service: services.products,
            category_service: services.categories,
            order_service: services.orders,
            comment_service: services.comments,
            health_checks: Vec::new(),
            metrics: None,
        }
    }

    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
