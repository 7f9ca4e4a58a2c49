//! The assembled service set.

use crate::auth_service::{AuthService, AuthServiceImpl};
use crate::r#impl::{
    CategoryServiceImpl, CommentServiceImpl, OrderServiceImpl, ProductServiceImpl,
    UserServiceImpl,
};
use crate::{CategoryService, CommentService, OrderService, ProductService, UserService};
use skein_repository::Repositories;
use skein_security::{CredentialHasher, TokenProvider};
use std::sync::Arc;

/// Every service, behind its trait.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub products: Arc<dyn ProductService>,
    pub categories: Arc<dyn CategoryService>,
    pub orders: Arc<dyn OrderService>,
    pub comments: Arc<dyn CommentService>,
}

impl Services {
    pub fn new(
        repositories: &Repositories,
        password_hasher: Arc<dyn CredentialHasher>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        let users: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(
            repositories.users.clone(),
            repositories.orders.clone(),
            repositories.comments.clone(),
            Arc::clone(&password_hasher),
        ));
        let auth = Arc::new(AuthServiceImpl::new(
            repositories.users.clone(),
            Arc::clone(&users),
            password_hasher,
            token_provider,
        ));

        Self {
            auth,
            users,
            products: Arc::new(ProductServiceImpl::new(
                repositories.products.clone(),
                repositories.categories.clone(),
                repositories.comments.clone(),
            )),
            categories: Arc::new(CategoryServiceImpl::new(repositories.categories.clone())),
            orders: Arc::new(OrderServiceImpl::new(repositories.orders.clone())),
            comments: Arc::new(CommentServiceImpl::new(
                repositories.comments.clone(),
                repositories.products.clone(),
            )),
        }
    }
}
