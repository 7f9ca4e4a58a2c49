//! Token provider for issuing and validating bearer tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use skein_config::SecurityConfig;
use skein_core::{RecordId, SkeinError, SkeinResult, UserRole};
use tracing::{debug, warn};

/// Only algorithm accepted on incoming tokens.
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// A freshly signed token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact serialized token.
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

/// Bearer token provider.
///
/// The signing key is handed in at construction; there is no ambient key.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_secs: u64,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a token provider from the security configuration.
    ///
    /// An empty signing key is a configuration error.
    pub fn new(config: &SecurityConfig) -> SkeinResult<Self> {
        if config.jwt_secret.trim().is_empty() {
            return Err(SkeinError::Configuration(
                "token signing key is not configured".to_string(),
            ));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.algorithms = vec![SIGNING_ALGORITHM];
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            encoding_key,
            decoding_key,
            issuer: config.jwt_issuer.clone(),
            ttl_secs: config.token_ttl_secs,
            validation,
        })
    }

    /// Signs a token for the given identity.
    pub fn issue_token(
        &self,
        user_id: RecordId,
        email: &str,
        role: UserRole,
    ) -> SkeinResult<IssuedToken> {
        let issued_at = Utc::now();
        let ttl = i64::try_from(self.ttl_secs)
            .map_err(|_| SkeinError::Configuration("token lifetime out of range".to_string()))?;
        let expires_at = issued_at + Duration::seconds(ttl);

        let claims = Claims::new(
            user_id,
            email.to_string(),
            role,
            self.issuer.clone(),
            issued_at,
            expires_at,
        );

        let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| SkeinError::Internal(format!("Failed to sign token: {e}")))?;

        debug!("Issued token for user {}", user_id);
        Ok(IssuedToken {
            token,
            expires_in: self.ttl_secs,
        })
    }

    /// Validates a token and returns its claims.
    ///
    /// Signature, algorithm, expiry and issuer are all checked. Every failure
    /// is reported as the same `Unauthorized` error; the reason is only logged.
    pub fn validate_token(&self, token: &str) -> SkeinResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!(reason = ?e.kind(), "Token validation failed");
                SkeinError::unauthorized("Invalid or expired token")
            })
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.issuer)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
