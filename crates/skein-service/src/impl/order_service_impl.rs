//! Order service implementation.

use crate::crud_service::CrudService;
use crate::dto::{CreateOrderRequest, UpdateOrderRequest};
use crate::order_service::OrderService;
use crate::rules;
use async_trait::async_trait;
use chrono::Utc;
use skein_core::{Order, RecordId, ResultExt, SkeinResult};
use skein_repository::{OrderDao, OrderRepository};
use skein_security::Principal;
use tracing::{debug, warn};

pub struct OrderServiceImpl {
    orders: CrudService<Order, dyn OrderDao>,
}

impl OrderServiceImpl {
    pub fn new(repository: OrderRepository) -> Self {
        Self {
            orders: CrudService::new(repository, rules::validate_order),
        }
    }

    /// Loads an order the principal is allowed to see.
    async fn load_owned(&self, principal: &Principal, id: RecordId) -> SkeinResult<Order> {
        let order = self.orders.get(id).await?;
        if let Err(e) = principal.require_owner_or_admin(order.user_id) {
            warn!("User {} denied access to order {}", principal.user_id, id);
            return Err(e);
        }
        Ok(order)
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn list_orders(&self, principal: &Principal) -> SkeinResult<Vec<Order>> {
        if principal.is_admin() {
            return self.orders.list().await;
        }

        debug!("Listing orders of user {}", principal.user_id);
        self.orders
            .repository()
            .dao()
            .list_by_user(principal.user_id)
            .await
            .with_context(|| format!("failed to list orders of user {}", principal.user_id))
    }

    async fn get_order(&self, principal: &Principal, id: RecordId) -> SkeinResult<Order> {
        self.load_owned(principal, id).await
    }

    async fn create_order(
        &self,
        principal: &Principal,
        request: CreateOrderRequest,
    ) -> SkeinResult<Order> {
        let order = Order {
            id: 0,
            user_id: principal.user_id,
            total: request.total,
            status: request
                .status
                .unwrap_or_else(|| Order::DEFAULT_STATUS.to_string()),
            created_at: Utc::now(),
        };
        self.orders.create(order).await
    }

    async fn update_order(
        &self,
        principal: &Principal,
        id: RecordId,
        request: UpdateOrderRequest,
    ) -> SkeinResult<Order> {
        let mut order = self.load_owned(principal, id).await?;
        if let Some(total) = request.total {
            order.total = total;
        }
        if let Some(status) = request.status {
            order.status = status;
        }
        self.orders.update(order).await
    }

    async fn delete_order(&self, principal: &Principal, id: RecordId) -> SkeinResult<()> {
        self.load_owned(principal, id).await?;
        self.orders.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin, repositories, user};
    use rust_decimal::Decimal;

    fn service() -> OrderServiceImpl {
        OrderServiceImpl::new(repositories().orders)
    }

    fn request(total: i64) -> CreateOrderRequest {
        CreateOrderRequest {
            total: Decimal::new(total, 2),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_owner_comes_from_principal() {
        let service = service();
        let order = service.create_order(&user(3), request(2_500)).await.unwrap();

        assert_eq!(order.user_id, 3);
        assert_eq!(order.status, Order::DEFAULT_STATUS);
        assert_eq!(service.get_order(&user(3), order.id).await.unwrap(), order);
    }

    #[tokio::test]
    async fn test_non_positive_total_is_rejected() {
        let err = service()
            .create_order(&user(3), request(0))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_other_users_are_forbidden() {
        let service = service();
        let order = service.create_order(&user(3), request(2_500)).await.unwrap();

        let err = service.get_order(&user(4), order.id).await.unwrap_err();
        assert_eq!(err.status_code(), 403);
        let err = service
            .update_order(&user(4), order.id, UpdateOrderRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        let err = service.delete_order(&user(4), order.id).await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        assert!(service.get_order(&admin(1), order.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_listing_is_scoped_to_caller() {
        let service = service();
        service.create_order(&user(3), request(100)).await.unwrap();
        service.create_order(&user(3), request(200)).await.unwrap();
        service.create_order(&user(4), request(300)).await.unwrap();

        assert_eq!(service.list_orders(&user(3)).await.unwrap().len(), 2);
        assert_eq!(service.list_orders(&user(5)).await.unwrap().len(), 0);
        assert_eq!(service.list_orders(&admin(1)).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let service = service();
        let order = service.create_order(&user(3), request(2_500)).await.unwrap();
        service.get_order(&user(3), order.id).await.unwrap();

        let updated = service
            .update_order(
                &user(3),
                order.id,
                UpdateOrderRequest {
                    total: None,
                    status: Some("completed".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.total, order.total);

        let fetched = service.get_order(&user(3), order.id).await.unwrap();
        assert_eq!(fetched.status, "completed");
    }

    #[tokio::test]
    async fn test_admin_delete_then_not_found() {
        let service = service();
        let order = service.create_order(&user(3), request(2_500)).await.unwrap();

        service.delete_order(&admin(1), order.id).await.unwrap();
        let err = service.delete_order(&admin(1), order.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
