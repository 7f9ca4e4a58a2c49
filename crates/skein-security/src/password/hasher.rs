//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};
use skein_core::{SkeinError, SkeinResult};
use std::sync::Arc;
use tracing::debug;

/// Interface for password hashing operations.
///
/// Services hold an `Arc<dyn CredentialHasher>` so tests can swap in cheap
/// parameters.
pub trait CredentialHasher: Send + Sync {
    /// Hashes a password. Fails if the password is empty.
    fn hash(&self, password: &str) -> SkeinResult<String>;

    /// Verifies a password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch and an error only for unreadable hashes.
    fn verify(&self, password: &str, hash: &str) -> SkeinResult<bool>;
}

/// Argon2id password hasher.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a new password hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates a new password hasher with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Self {
            argon2: Arc::new(argon2),
        }
    }

    /// Creates a hasher with minimal cost, for tests only.
    #[must_use]
    pub fn fast() -> Self {
        Self::with_params(Params::new(1024, 1, 1, None).unwrap_or(Params::DEFAULT))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for PasswordHasher {
    fn hash(&self, password: &str) -> SkeinResult<String> {
        if password.is_empty() {
            return Err(SkeinError::validation("password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| SkeinError::Internal(format!("Failed to hash password: {e}")))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> SkeinResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| SkeinError::Internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => {
                debug!("Password verified successfully");
                Ok(true)
            }
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(SkeinError::Internal(format!(
                "Password verification error: {e}"
            ))),
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::fast();
        let hash = hasher.hash("pw123456").unwrap();

        assert_ne!(hash, "pw123456");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pw123456", &hash).unwrap());
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::fast();
        let first = hasher.hash("pw123456").unwrap();
        let second = hasher.hash("pw123456").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("pw123456", &first).unwrap());
        assert!(hasher.verify("pw123456", &second).unwrap());
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let err = PasswordHasher::fast().hash("").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_invalid_hash_format_returns_error() {
        let result = PasswordHasher::fast().verify("pw123456", "not-a-hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_params_verify_fast_hash() {
        let hash = PasswordHasher::fast().hash("pw123456").unwrap();
        assert!(PasswordHasher::default().verify("pw123456", &hash).unwrap());
    }

    #[test]
    fn test_debug_does_not_leak_internals() {
        let debug = format!("{:?}", PasswordHasher::fast());
        assert_eq!(debug, "PasswordHasher { .. }");
    }
}
