//! HTTP controllers.

pub mod auth_controller;
pub mod catalog_controller;
pub mod comment_controller;
pub mod health_controller;
pub mod order_controller;
pub mod user_controller;
