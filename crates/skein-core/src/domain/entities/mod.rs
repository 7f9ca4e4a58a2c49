//! Domain entities.

mod category;
mod comment;
mod order;
mod product;
mod user;

pub use category::Category;
pub use comment::Comment;
pub use order::Order;
pub use product::Product;
pub use user::User;
