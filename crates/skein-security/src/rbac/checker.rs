//! Role and ownership checks over the authenticated principal.

use crate::Claims;
use serde::{Deserialize, Serialize};
use skein_core::{RecordId, SkeinError, SkeinResult, UserRole};

/// Verified identity of the caller, placed in request extensions after
/// token validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: RecordId,
    pub email: String,
    pub role: UserRole,
}

impl Principal {
    #[must_use]
    pub fn new(user_id: RecordId, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Checks if the principal owns a resource.
    #[must_use]
    pub fn is_owner(&self, resource_owner_id: RecordId) -> bool {
        self.user_id == resource_owner_id
    }

    /// Requires the administrator role.
    pub fn require_admin(&self) -> SkeinResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(SkeinError::forbidden(format!(
                "Required role: admin, your role: {}",
                self.role
            )))
        }
    }

    /// Requires either ownership of the resource or the administrator role.
    pub fn require_owner_or_admin(&self, resource_owner_id: RecordId) -> SkeinResult<()> {
        if self.is_admin() || self.is_owner(resource_owner_id) {
            Ok(())
        } else {
            Err(SkeinError::forbidden(
                "You don't have permission to access this resource",
            ))
        }
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}
