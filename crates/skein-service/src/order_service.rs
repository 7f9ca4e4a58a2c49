//! Order service trait definition.

use crate::dto::{CreateOrderRequest, UpdateOrderRequest};
use async_trait::async_trait;
use skein_core::{Order, RecordId, SkeinResult};
use skein_security::Principal;

/// Orders, scoped to the calling account.
///
/// Only the owner or an administrator may read or change an order.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Lists the caller's orders, or every order for an administrator.
    async fn list_orders(&self, principal: &Principal) -> SkeinResult<Vec<Order>>;

    async fn get_order(&self, principal: &Principal, id: RecordId) -> SkeinResult<Order>;

    /// Places an order owned by the caller.
    async fn create_order(
        &self,
        principal: &Principal,
        request: CreateOrderRequest,
    ) -> SkeinResult<Order>;

    async fn update_order(
        &self,
        principal: &Principal,
        id: RecordId,
        request: UpdateOrderRequest,
    ) -> SkeinResult<Order>;

    async fn delete_order(&self, principal: &Principal, id: RecordId) -> SkeinResult<()>;
}
