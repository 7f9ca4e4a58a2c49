//! Token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skein_core::{RecordId, UserRole};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as a string).
    pub sub: String,

    /// User ID.
    pub user_id: RecordId,

    /// User's email.
    pub email: String,

    /// User's role.
    pub role: UserRole,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,
}

impl Claims {
    /// Creates claims for a freshly issued token.
    #[must_use]
    pub fn new(
        user_id: RecordId,
        email: String,
        role: UserRole,
        issuer: String,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            user_id,
            email,
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer,
        }
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_claims_carry_identity() {
        let now = Utc::now();
        let claims = Claims::new(
            42,
            "a@x.com".to_string(),
            UserRole::Admin,
            "online-store".to_string(),
            now,
            now + Duration::hours(24),
        );

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(!claims.is_expired());
        assert_eq!(claims.expires_at().timestamp(), claims.exp);
    }

    #[test]
    fn test_expired_claims() {
        let now = Utc::now();
        let claims = Claims::new(
            1,
            "a@x.com".to_string(),
            UserRole::User,
            "online-store".to_string(),
            now - Duration::hours(2),
            now - Duration::hours(1),
        );
        assert!(claims.is_expired());
    }
}
