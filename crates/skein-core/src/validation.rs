//! Validation utilities.

use crate::{FieldError, SkeinError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `SkeinError` on failure.
    fn validate_request(&self) -> Result<(), SkeinError> {
        self.validate().map_err(validation_errors_to_skein_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to `SkeinError`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn validation_errors_to_skein_error(errors: ValidationErrors) -> SkeinError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    SkeinError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Minimum accepted password length.
    pub const PASSWORD_MIN_LENGTH: usize = 6;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a password is long enough and not only whitespace.
    pub fn password_strength(password: &str) -> Result<(), ValidationError> {
        if password.trim().is_empty() {
            return Err(ValidationError::new("password_blank"));
        }
        if password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(ValidationError::new("password_too_short"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[derive(Validate)]
    struct SignupForm {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_password_strength() {
        assert!(password_strength("pw123456").is_ok());
        assert!(password_strength("short").is_err());
        assert!(password_strength("        ").is_err());
    }

    #[test]
    fn test_validate_request_collects_fields() {
        let form = SignupForm {
            name: String::new(),
            email: "not-an-email".to_string(),
        };
        let err = form.validate_request().unwrap_err();
        assert_eq!(err.status_code(), 400);
        let message = err.to_string();
        assert!(message.contains("name: name is required"));
        assert!(message.contains("email"));
    }

    #[test]
    fn test_field_errors_use_code_when_message_missing() {
        let form = SignupForm {
            name: "ok".to_string(),
            email: "bad".to_string(),
        };
        let errors = form.validate().unwrap_err();
        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "email");
        assert_eq!(fields[0].message, "email");
    }
}
