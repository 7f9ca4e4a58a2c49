//! PostgreSQL DAO implementations.
//!
//! Every mutating statement is a single `INSERT`/`UPDATE`/`DELETE` with
//! `RETURNING`, so there is no multi-statement transaction to manage.

mod category_dao_impl;
mod comment_dao_impl;
mod order_dao_impl;
mod product_dao_impl;
mod user_dao_impl;

pub use category_dao_impl::PgCategoryDaoImpl;
pub use comment_dao_impl::PgCommentDaoImpl;
pub use order_dao_impl::PgOrderDaoImpl;
pub use product_dao_impl::PgProductDaoImpl;
pub use user_dao_impl::PgUserDaoImpl;
