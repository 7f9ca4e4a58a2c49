//! Order data access.

use super::RecordDao;
use async_trait::async_trait;
use skein_core::{Order, RecordId, SkeinResult};

#[async_trait]
pub trait OrderDao: RecordDao<Order> {
    /// Lists the orders placed by one account, ordered by id.
    async fn list_by_user(&self, user_id: RecordId) -> SkeinResult<Vec<Order>>;
}
