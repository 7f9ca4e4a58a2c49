//! User-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skein_core::{RecordId, User, UserRole};
use validator::Validate;

/// Request to create a new user (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Name cannot exceed 128 characters"))]
    pub name: String,

    #[validate(custom(
        function = "skein_core::rules::password_strength",
        message = "Password must be at least 6 characters"
    ))]
    pub password: String,

    #[serde(default)]
    pub role: UserRole,
}

/// Request to update a user. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "Name cannot exceed 128 characters"))]
    pub name: Option<String>,

    pub role: Option<UserRole>,

    /// New password; re-hashed when present.
    #[validate(custom(
        function = "skein_core::rules::password_strength",
        message = "Password must be at least 6 characters"
    ))]
    pub password: Option<String>,
}

/// User response DTO. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
