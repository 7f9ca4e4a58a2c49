//! The set of cache-aside repositories the services run on.

use crate::cache::CacheStore;
use crate::dao::{CategoryDao, CommentDao, OrderDao, ProductDao, UserDao};
use crate::pool::DatabasePool;
use crate::{
    CategoryRepository, CommentRepository, OrderRepository, PgCategoryDaoImpl,
    PgCommentDaoImpl, PgOrderDaoImpl, PgProductDaoImpl, PgUserDaoImpl, ProductRepository,
    UserRepository,
};
use std::sync::Arc;
use std::time::Duration;

/// One repository per resource, all sharing a cache store and TTL.
#[derive(Clone, Debug)]
pub struct Repositories {
    pub users: UserRepository,
    pub products: ProductRepository,
    pub categories: CategoryRepository,
    pub orders: OrderRepository,
    pub comments: CommentRepository,
}

/// DAO trait objects for each resource.
pub struct DaoSet {
    pub users: Arc<dyn UserDao>,
    pub products: Arc<dyn ProductDao>,
    pub categories: Arc<dyn CategoryDao>,
    pub orders: Arc<dyn OrderDao>,
    pub comments: Arc<dyn CommentDao>,
}

impl Repositories {
    #[must_use]
    pub fn new(daos: DaoSet, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            users: UserRepository::new(daos.users, Arc::clone(&cache), ttl),
            products: ProductRepository::new(daos.products, Arc::clone(&cache), ttl),
            categories: CategoryRepository::new(daos.categories, Arc::clone(&cache), ttl),
            orders: OrderRepository::new(daos.orders, Arc::clone(&cache), ttl),
            comments: CommentRepository::new(daos.comments, cache, ttl),
        }
    }

    /// Repositories backed by the PostgreSQL DAOs.
    #[must_use]
    pub fn postgres(pool: &Arc<DatabasePool>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        let daos = DaoSet {
            users: Arc::new(PgUserDaoImpl::new(Arc::clone(pool))),
            products: Arc::new(PgProductDaoImpl::new(Arc::clone(pool))),
            categories: Arc::new(PgCategoryDaoImpl::new(Arc::clone(pool))),
            orders: Arc::new(PgOrderDaoImpl::new(Arc::clone(pool))),
            comments: Arc::new(PgCommentDaoImpl::new(Arc::clone(pool))),
        };
        Self::new(daos, cache, ttl)
    }

    /// Repositories backed by in-process maps.
    #[cfg(any(test, feature = "memory"))]
    #[must_use]
    pub fn in_memory(cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        use crate::MemoryDao;
        use skein_core::{Category, Comment, Order, Product, User};

        let daos = DaoSet {
            users: Arc::new(MemoryDao::<User>::new()),
            products: Arc::new(MemoryDao::<Product>::new()),
            categories: Arc::new(MemoryDao::<Category>::new()),
            orders: Arc::new(MemoryDao::<Order>::new()),
            comments: Arc::new(MemoryDao::<Comment>::new()),
        };
        Self::new(daos, cache, ttl)
    }
}
