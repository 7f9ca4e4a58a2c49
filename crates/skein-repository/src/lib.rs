//! # Skein Repository
//!
//! Data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  CachedRepository<T, dyn XDao>   (cache-aside engine, one for all resources)
//!   ├─ Arc<dyn CacheStore>           (Redis, or in-memory for tests)
//!   ↓  Arc<dyn XDao>                   (DAO interface)
//! PgXDaoImpl                           (DAO impl, PostgreSQL / SQLx)
//!   ↓
//! PostgreSQL
//! ```
//!
//! Primary-key reads go through the cache. Lists, searches and email lookups
//! always read the store directly through [`CachedRepository::dao`].

pub mod cache;
pub mod cached;
pub mod dao;
pub mod pool;
pub mod registry;

pub use cache::*;
pub use cached::CachedRepository;
pub use dao::r#impl::*;
pub use dao::*;
pub use pool::*;
pub use registry::{DaoSet, Repositories};

use skein_core::{Category, Comment, Order, Product, User};

pub type UserRepository = CachedRepository<User, dyn UserDao>;
pub type ProductRepository = CachedRepository<Product, dyn ProductDao>;
pub type CategoryRepository = CachedRepository<Category, dyn CategoryDao>;
pub type OrderRepository = CachedRepository<Order, dyn OrderDao>;
pub type CommentRepository = CachedRepository<Comment, dyn CommentDao>;
