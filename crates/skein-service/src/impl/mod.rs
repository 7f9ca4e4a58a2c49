//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

pub mod category_service_impl;
pub mod comment_service_impl;
pub mod order_service_impl;
pub mod product_service_impl;
pub mod user_service_impl;

pub use category_service_impl::CategoryServiceImpl;
pub use comment_service_impl::CommentServiceImpl;
pub use order_service_impl::OrderServiceImpl;
pub use product_service_impl::ProductServiceImpl;
pub use user_service_impl::UserServiceImpl;
