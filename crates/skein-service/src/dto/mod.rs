//! Data Transfer Objects (DTOs).

mod auth_dto;
mod catalog_dto;
mod comment_dto;
mod order_dto;
mod user_dto;

pub use auth_dto::*;
pub use catalog_dto::*;
pub use comment_dto::*;
pub use order_dto::*;
pub use user_dto::*;
