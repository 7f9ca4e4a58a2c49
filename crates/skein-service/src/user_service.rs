//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use skein_core::{RecordId, SkeinResult};

/// User administration.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user, hashing the supplied password.
    async fn create_user(&self, request: CreateUserRequest) -> SkeinResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: RecordId) -> SkeinResult<UserResponse>;

    /// Lists all users.
    async fn list_users(&self) -> SkeinResult<Vec<UserResponse>>;

    /// Updates a user. A new password is re-hashed; without one the stored
    /// hash is kept.
    async fn update_user(
        &self,
        id: RecordId,
        request: UpdateUserRequest,
    ) -> SkeinResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: RecordId) -> SkeinResult<()>;
}
