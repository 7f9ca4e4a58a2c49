//! User service implementation.

use crate::crud_service::CrudService;
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::rules;
use crate::user_service::UserService;
use async_trait::async_trait;
use skein_core::{RecordId, ResultExt, SkeinError, SkeinResult, User, ValidateExt};
use skein_repository::{
    CommentDao, CommentRepository, OrderDao, OrderRepository, UserDao, UserRepository,
};
use skein_security::CredentialHasher;
use std::sync::Arc;
use tracing::{debug, info};

pub struct UserServiceImpl {
    users: CrudService<User, dyn UserDao>,
    /// The store deletes an account's orders and comments with it; their
    /// cached snapshots are evicted here.
    orders: OrderRepository,
    comments: CommentRepository,
    password_hasher: Arc<dyn CredentialHasher>,
}

impl UserServiceImpl {
    pub fn new(
        repository: UserRepository,
        orders: OrderRepository,
        comments: CommentRepository,
        password_hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            users: CrudService::new(repository, rules::validate_user),
            orders,
            comments,
            password_hasher,
        }
    }

    /// Fails with `Conflict` if another account already uses `email`.
    async fn ensure_email_available(
        &self,
        email: &str,
        owner: Option<RecordId>,
    ) -> SkeinResult<()> {
        let existing = self
            .users
            .repository()
            .dao()
            .find_by_email(email)
            .await
            .context("failed to look up email")?;

        match existing {
            Some(user) if Some(user.id) != owner => Err(SkeinError::conflict(format!(
                "Email '{email}' already exists"
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: CreateUserRequest) -> SkeinResult<UserResponse> {
        debug!("Creating user: {}", request.email);

        request.validate_request()?;
        self.ensure_email_available(&request.email, None).await?;

        let password_hash = self.password_hasher.hash(&request.password)?;
        let user = User::new(request.email, request.name, password_hash, request.role);
        let saved = self.users.create(user).await?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn get_user(&self, id: RecordId) -> SkeinResult<UserResponse> {
        self.users.get(id).await.map(UserResponse::from)
    }

    async fn list_users(&self) -> SkeinResult<Vec<UserResponse>> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn update_user(
        &self,
        id: RecordId,
        request: UpdateUserRequest,
    ) -> SkeinResult<UserResponse> {
        debug!("Updating user: {}", id);

        request.validate_request()?;
        let mut user = self.users.get(id).await?;

        if let Some(email) = request.email {
            if !email.eq_ignore_ascii_case(&user.email) {
                self.ensure_email_available(&email, Some(id)).await?;
            }
            user.email = email;
        }
        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(password) = request.password {
            user.password_hash = self.password_hasher.hash(&password)?;
            debug!("Password changed for user: {}", id);
        }

        let updated = self.users.update(user).await?;
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: RecordId) -> SkeinResult<()> {
        let order_ids: Vec<RecordId> = self
            .orders
            .dao()
            .list_by_user(id)
            .await
            .with_context(|| format!("failed to list orders of user {id}"))?
            .iter()
            .map(|order| order.id)
            .collect();
        let comment_ids: Vec<RecordId> = self
            .comments
            .dao()
            .list_by_user(id)
            .await
            .with_context(|| format!("failed to list comments of user {id}"))?
            .iter()
            .map(|comment| comment.id)
            .collect();

        self.users.delete(id).await?;

        self.orders.invalidate(&order_ids).await;
        self.comments.invalidate(&comment_ids).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use skein_core::{Comment, Order, Resource, UserRole};
    use skein_repository::{InMemoryCache, Repositories};
    use skein_security::PasswordHasher;

    struct Fixture {
        service: UserServiceImpl,
        repository: UserRepository,
        repos: Repositories,
        cache: Arc<InMemoryCache>,
        hasher: Arc<PasswordHasher>,
    }

    fn fixture() -> Fixture {
        let (repos, cache) = test_support::repositories_with_cache();
        let hasher = Arc::new(PasswordHasher::fast());
        let service = UserServiceImpl::new(
            repos.users.clone(),
            repos.orders.clone(),
            repos.comments.clone(),
            hasher.clone(),
        );
        Fixture {
            service,
            repository: repos.users.clone(),
            repos,
            cache,
            hasher,
        }
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            name: "Ann".to_string(),
            password: "pw123456".to_string(),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn test_create_user_stores_hash_not_plaintext() {
        let f = fixture();
        let created = f.service.create_user(create_request("a@x.com")).await.unwrap();

        let stored = f.repository.get(created.id).await.unwrap();
        assert_ne!(stored.password_hash, "pw123456");
        assert!(f.hasher.verify("pw123456", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let f = fixture();
        f.service.create_user(create_request("a@x.com")).await.unwrap();

        let err = f.service.create_user(create_request("A@X.com")).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_hash() {
        let f = fixture();
        let created = f.service.create_user(create_request("a@x.com")).await.unwrap();
        let before = f.repository.get(created.id).await.unwrap().password_hash;

        let updated = f
            .service
            .update_user(
                created.id,
                UpdateUserRequest {
                    name: Some("Annie".to_string()),
                    role: Some(UserRole::Admin),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Annie");
        assert_eq!(updated.role, UserRole::Admin);

        let after = f.repository.get(created.id).await.unwrap().password_hash;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_with_password_rehashes() {
        let f = fixture();
        let created = f.service.create_user(create_request("a@x.com")).await.unwrap();

        f.service
            .update_user(
                created.id,
                UpdateUserRequest {
                    password: Some("newpass1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = f.repository.get(created.id).await.unwrap();
        assert!(f.hasher.verify("newpass1", &stored.password_hash).unwrap());
        assert!(!f.hasher.verify("pw123456", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_update_email_to_taken_address_conflicts() {
        let f = fixture();
        f.service.create_user(create_request("a@x.com")).await.unwrap();
        let bob = f.service.create_user(create_request("b@x.com")).await.unwrap();

        let err = f
            .service
            .update_user(
                bob.id,
                UpdateUserRequest {
                    email: Some("a@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);

        // Re-submitting one's own address is fine.
        f.service
            .update_user(
                bob.id,
                UpdateUserRequest {
                    email: Some("B@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let f = fixture();
        assert!(f.service.get_user(9).await.unwrap_err().is_not_found());
        assert!(f
            .service
            .update_user(9, UpdateUserRequest::default())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(f.service.delete_user(9).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_evicts_cached_orders_and_comments_of_the_account() {
        let f = fixture();
        let ann = f.service.create_user(create_request("a@x.com")).await.unwrap();
        let bob = f.service.create_user(create_request("b@x.com")).await.unwrap();

        let order = |user_id| Order {
            id: 0,
            user_id,
            total: Decimal::new(2_500, 2),
            status: Order::DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
        };
        let anns_order = f.repos.orders.create(&order(ann.id)).await.unwrap();
        let bobs_order = f.repos.orders.create(&order(bob.id)).await.unwrap();
        let anns_comment = f
            .repos
            .comments
            .create(&Comment {
                id: 0,
                product_id: 1,
                user_id: ann.id,
                text: "Lovely".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        f.repos.orders.get(anns_order.id).await.unwrap();
        f.repos.orders.get(bobs_order.id).await.unwrap();
        f.repos.comments.get(anns_comment.id).await.unwrap();

        f.service.delete_user(ann.id).await.unwrap();

        assert!(!f.cache.contains(&Order::cache_key(anns_order.id)));
        assert!(!f.cache.contains(&Comment::cache_key(anns_comment.id)));
        assert!(f.cache.contains(&Order::cache_key(bobs_order.id)));
    }
}
