//! Main application router.

use crate::{
    controllers::{
        auth_controller, catalog_controller, comment_controller, health_controller,
        order_controller, user_controller,
    },
    middleware::{
        cors_middleware, logging_middleware, request_context_middleware, require_admin,
        require_auth, CorsPolicy,
    },
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use skein_config::ServerConfig;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
///
/// Routes fall into three groups: public, bearer-authenticated and
/// admin-only. Groups sharing a path are merged, so `GET /products` stays
/// public while `POST /products` needs an admin token.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let public = Router::new()
        .route("/auth/register", post(auth_controller::register))
        .route("/auth/login", post(auth_controller::login))
        .route("/products", get(catalog_controller::list_products))
        .route("/products/search", get(catalog_controller::search_products))
        .route("/products/:id", get(catalog_controller::get_product))
        .route("/categories", get(catalog_controller::list_categories))
        .route("/categories/:id", get(catalog_controller::get_category))
        .route("/comments", get(comment_controller::list_comments))
        .route("/comments/:id", get(comment_controller::get_comment));

    let authenticated = Router::new()
        .route("/auth/me", get(auth_controller::me))
        .route(
            "/orders",
            get(order_controller::list_orders).post(order_controller::create_order),
        )
        .route(
            "/orders/:id",
            get(order_controller::get_order)
                .put(order_controller::update_order)
                .delete(order_controller::delete_order),
        )
        .route("/comments", post(comment_controller::create_comment))
        .route(
            "/comments/:id",
            axum::routing::put(comment_controller::update_comment)
                .delete(comment_controller::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let admin = Router::new()
        .route(
            "/users",
            get(user_controller::list_users).post(user_controller::create_user),
        )
        .route(
            "/users/:id",
            get(user_controller::get_user)
                .put(user_controller::update_user)
                .delete(user_controller::delete_user),
        )
        .route("/products", post(catalog_controller::create_product))
        .route(
            "/products/:id",
            axum::routing::put(catalog_controller::update_product)
                .delete(catalog_controller::delete_product),
        )
        .route("/categories", post(catalog_controller::create_category))
        .route(
            "/categories/:id",
            axum::routing::put(catalog_controller::update_category)
                .delete(catalog_controller::delete_category),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let router = Router::new()
        .route("/health", get(health_controller::health_check))
        .route("/health/ready", get(health_controller::readiness_check))
        .route("/metrics", get(health_controller::metrics))
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(middleware::from_fn_with_state(
            CorsPolicy::new(&server_config.cors_allowed_origin),
            cors_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_context_middleware));

    info!("Router created with {} CORS origin", server_config.cors_allowed_origin);
    router
}
