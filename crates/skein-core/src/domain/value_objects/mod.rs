//! Value objects.

mod product_type;
mod role;

pub use product_type::ProductType;
pub use role::UserRole;
