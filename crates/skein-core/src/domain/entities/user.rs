//! User entity.

use crate::domain::value_objects::UserRole;
use crate::{RecordId, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account of a customer or administrator.
///
/// The password hash is part of the persisted and cached snapshot; outward
/// representations are built from DTOs that leave it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-generated identifier.
    pub id: RecordId,

    /// Unique email address.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Account role.
    pub role: UserRole,

    /// Salted one-way password hash.
    pub password_hash: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a not-yet-persisted user.
    #[must_use]
    pub fn new(email: String, name: String, password_hash: String, role: UserRole) -> Self {
        Self {
            id: 0,
            email,
            name,
            role,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the user has the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl Resource for User {
    const NAME: &'static str = "user";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
