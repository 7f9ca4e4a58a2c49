//! Authentication service.

use crate::dto::{CreateUserRequest, LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use skein_core::{ResultExt, SkeinError, SkeinResult, UserRole, ValidateExt};
use skein_repository::{UserDao, UserRepository};
use skein_security::{CredentialHasher, Principal, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new account with the ordinary role.
    async fn register(&self, request: RegisterRequest) -> SkeinResult<UserResponse>;

    /// Checks credentials and issues a bearer token.
    async fn login(&self, request: LoginRequest) -> SkeinResult<LoginResponse>;

    /// Validates a bearer token and returns the caller's identity.
    fn authenticate(&self, token: &str) -> SkeinResult<Principal>;

    /// Gets the account behind an authenticated principal.
    async fn current_user(&self, principal: &Principal) -> SkeinResult<UserResponse>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl {
    users: UserRepository,
    user_service: Arc<dyn UserService>,
    password_hasher: Arc<dyn CredentialHasher>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    pub fn new(
        users: UserRepository,
        user_service: Arc<dyn UserService>,
        password_hasher: Arc<dyn CredentialHasher>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            users,
            user_service,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: RegisterRequest) -> SkeinResult<UserResponse> {
        debug!("Registering user: {}", request.email);

        request.validate_request()?;
        let user = self
            .user_service
            .create_user(CreateUserRequest {
                email: request.email,
                name: request.name,
                password: request.password,
                role: UserRole::User,
            })
            .await?;

        info!("User registered: {}", user.id);
        Ok(user)
    }

    async fn login(&self, request: LoginRequest) -> SkeinResult<LoginResponse> {
        debug!("Login attempt: {}", request.email);

        request.validate_request()?;
        let user = self
            .users
            .dao()
            .find_by_email(&request.email)
            .await
            .context("failed to look up account")?;

        let Some(user) = user else {
            warn!("Login failed: unknown email {}", request.email);
            return Err(SkeinError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            warn!("Login failed: invalid password for user {}", user.id);
            return Err(SkeinError::InvalidCredentials);
        }

        let issued = self.token_provider.issue_token(user.id, &user.email, user.role)?;

        info!("User logged in: {}", user.id);
        Ok(LoginResponse::bearer(issued.token, issued.expires_in))
    }

    fn authenticate(&self, token: &str) -> SkeinResult<Principal> {
        self.token_provider.validate_token(token).map(Principal::from)
    }

    async fn current_user(&self, principal: &Principal) -> SkeinResult<UserResponse> {
        self.users
            .get(principal.user_id)
            .await
            .map(UserResponse::from)
            .context("failed to load current user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use crate::UserServiceImpl;
    use skein_config::SecurityConfig;
    use skein_security::PasswordHasher;

    fn service() -> AuthServiceImpl {
        let repos = test_support::repositories();
        let users = repos.users.clone();
        let hasher: Arc<dyn CredentialHasher> = Arc::new(PasswordHasher::fast());
        let user_service = Arc::new(UserServiceImpl::new(
            repos.users,
            repos.orders,
            repos.comments,
            Arc::clone(&hasher),
        ));
        let tokens = TokenProvider::new(&SecurityConfig {
            jwt_secret: "test-secret".to_string(),
            ..Default::default()
        })
        .unwrap();
        AuthServiceImpl::new(users, user_service, hasher, Arc::new(tokens))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            name: String::new(),
            password: "pw123456".to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        let user = service.register(register_request("a@x.com")).await.unwrap();
        assert_eq!(user.role, UserRole::User);

        let response = service
            .login(login_request("a@x.com", "pw123456"))
            .await
            .unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 86_400);

        let principal = service.authenticate(&response.token).unwrap();
        assert_eq!(principal.user_id, user.id);
        assert_eq!(principal.role, UserRole::User);

        let me = service.current_user(&principal).await.unwrap();
        assert_eq!(me, user);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = service();
        service.register(register_request("a@x.com")).await.unwrap();
        let err = service.register(register_request("a@x.com")).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let mut request = register_request("a@x.com");
        request.password = "pw".to_string();
        let err = service().register(request).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_login_failures_are_invalid_credentials() {
        let service = service();
        service.register(register_request("a@x.com")).await.unwrap();

        let wrong_password = service
            .login(login_request("a@x.com", "nope-nope"))
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, SkeinError::InvalidCredentials));

        let unknown = service
            .login(login_request("b@x.com", "pw123456"))
            .await
            .unwrap_err();
        assert!(matches!(unknown, SkeinError::InvalidCredentials));
        assert_eq!(unknown.status_code(), 401);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage() {
        let err = service().authenticate("not.a.token").unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
