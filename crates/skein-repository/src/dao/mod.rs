//! DAO (Data Access Object) layer.
//!
//! DAOs talk to exactly one data source and know nothing about caching.
//! [`RecordDao`] is the primary-key contract the cache-aside engine drives;
//! each resource adds its uncached queries on a sub-trait.
//!
//! ```text
//! Service → CachedRepository<T, dyn XDao> → XDao (trait) → Postgres / memory
//! ```

pub mod category_dao;
pub mod comment_dao;
pub mod r#impl;
pub mod order_dao;
pub mod product_dao;
pub mod record_dao;
pub mod user_dao;

pub use category_dao::CategoryDao;
pub use comment_dao::CommentDao;
pub use order_dao::OrderDao;
pub use product_dao::{ProductDao, ProductFilter};
pub use record_dao::RecordDao;
pub use user_dao::UserDao;
