//! DAO implementations, organized by technology.

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryDao;
pub use postgres::{
    PgCategoryDaoImpl, PgCommentDaoImpl, PgOrderDaoImpl, PgProductDaoImpl, PgUserDaoImpl,
};
