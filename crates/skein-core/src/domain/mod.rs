//! # Domain
//!
//! Entities and value objects of the storefront: accounts, catalog items,
//! categories, orders and comments.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
