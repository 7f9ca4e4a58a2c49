//! Authentication-related DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
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
}

/// Login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl LoginResponse {
    #[must_use]
    pub fn bearer(token: String, expires_in: u64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            email: "a@x.com".to_string(),
            name: String::new(),
            password: "pw123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_name_is_optional() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"pw123456"}"#).unwrap();
        assert_eq!(request.name, "");
    }

    #[test]
    fn test_register_request_invalid_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            name: "Ann".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_password_too_short() {
        let request = RegisterRequest {
            email: "a@x.com".to_string(),
            name: "Ann".to_string(),
            password: "pw1".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_password() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_response_is_bearer() {
        let response = LoginResponse::bearer("t".to_string(), 60);
        assert_eq!(response.token_type, "Bearer");
    }
}
