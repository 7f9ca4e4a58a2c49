//! # Skein Service
//!
//! Business logic service layer for the Skein storefront.
//!
//! Every resource service sits on [`CrudService`], one generic engine that
//! validates a record with a pluggable [`EntityValidator`], logs the call and
//! wraps failures with business context before delegating to the cache-aside
//! repository. Account services add password hashing and token issuing on
//! top; order and comment services add ownership checks.

pub mod auth_service;
pub mod category_service;
pub mod comment_service;
pub mod crud_service;
pub mod dto;
pub mod r#impl;
pub mod order_service;
pub mod product_service;
pub mod registry;
pub mod rules;
#[cfg(test)]
mod test_support;
pub mod user_service;

pub use auth_service::*;
pub use category_service::*;
pub use comment_service::*;
pub use crud_service::{CrudService, EntityValidator};
pub use dto::*;
pub use r#impl::*;
pub use order_service::*;
pub use product_service::*;
pub use registry::Services;
pub use user_service::*;
