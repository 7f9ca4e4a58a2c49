//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Skein.
///
/// Lower layers wrap errors with [`SkeinError::Context`] on the way up. The
/// classification methods ([`status_code`](Self::status_code),
/// [`error_code`](Self::error_code), [`is_not_found`](Self::is_not_found))
/// always answer for the root cause, however many layers of context sit on top.
#[derive(Error, Debug)]
pub enum SkeinError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Authentication/Authorization Errors ============
    /// Missing or invalid bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid identity, insufficient role
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unknown account or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// An error annotated with the operation that produced it.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SkeinError>,
    },
}

impl SkeinError {
    /// Returns the innermost error of a context chain.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Returns true if the root cause is a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::NotFound { .. })
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self.root() {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) | Self::InvalidCredentials => 401,
            Self::Forbidden(_) => 403,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Context { .. } => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.root() {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Context { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns true for errors whose message is safe to show to a client.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Wraps this error with a description of the failed operation.
    #[must_use]
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Adds operation context to fallible results.
pub trait ResultExt<T> {
    /// Wraps the error, if any, with a fixed context message.
    fn context<C: Into<String>>(self, context: C) -> Result<T, SkeinError>;

    /// Wraps the error, if any, with a lazily built context message.
    fn with_context<C: Into<String>, F: FnOnce() -> C>(self, f: F) -> Result<T, SkeinError>;
}

impl<T> ResultExt<T> for Result<T, SkeinError> {
    fn context<C: Into<String>>(self, context: C) -> Result<T, SkeinError> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<C: Into<String>, F: FnOnce() -> C>(self, f: F) -> Result<T, SkeinError> {
        self.map_err(|e| e.context(f()))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for SkeinError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => db_err
                .code()
                .and_then(|code| from_sql_state(&code, db_err.message()))
                .unwrap_or_else(|| Self::Database(err.to_string())),
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Maps the SQLSTATE codes caused by the request body to client errors.
#[cfg(feature = "sqlx")]
fn from_sql_state(code: &str, message: &str) -> Option<SkeinError> {
    match code {
        // unique violation
        "23505" => Some(SkeinError::Conflict(message.to_string())),
        // foreign key violation: the body names a record that does not exist
        "23503" => Some(SkeinError::Validation(message.to_string())),
        // numeric value out of range, e.g. a price too wide for its column
        "22003" => Some(SkeinError::Validation(message.to_string())),
        _ => None,
    }
}

impl From<serde_json::Error> for SkeinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {err}"))
    }
}

/// Serializable error body for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request correlation id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates an error response from a `SkeinError`.
    ///
    /// Server-side failures get a generic message; their detail belongs in
    /// the logs, not in the response body.
    #[must_use]
    pub fn from_error(error: &SkeinError) -> Self {
        let message = if error.is_client_error() {
            error.root().to_string()
        } else {
            "An internal error occurred".to_string()
        };
        Self {
            code: error.error_code().to_string(),
            message,
            details: None,
            trace_id: None,
        }
    }

    /// Creates an error response with an explicit code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&SkeinError> for ErrorResponse {
    fn from(error: &SkeinError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(SkeinError::not_found("product", 1).status_code(), 404);
        assert_eq!(SkeinError::validation("price must be positive").status_code(), 400);
        assert_eq!(SkeinError::unauthorized("no token").status_code(), 401);
        assert_eq!(SkeinError::InvalidCredentials.status_code(), 401);
        assert_eq!(SkeinError::forbidden("admin only").status_code(), 403);
        assert_eq!(SkeinError::conflict("duplicate").status_code(), 409);
        assert_eq!(SkeinError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(SkeinError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(SkeinError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SkeinError::not_found("user", 1).error_code(), "NOT_FOUND");
        assert_eq!(SkeinError::validation("bad").error_code(), "VALIDATION_ERROR");
        assert_eq!(SkeinError::forbidden("no").error_code(), "FORBIDDEN");
        assert_eq!(SkeinError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(SkeinError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sql_states_caused_by_input_are_client_errors() {
        let overflow = from_sql_state("22003", "numeric field overflow").unwrap();
        assert_eq!(overflow.status_code(), 400);
        assert_eq!(overflow.to_string(), "Validation error: numeric field overflow");

        assert_eq!(from_sql_state("23505", "duplicate key").unwrap().status_code(), 409);
        assert_eq!(from_sql_state("23503", "missing parent").unwrap().status_code(), 400);
        assert!(from_sql_state("40001", "serialization failure").is_none());
    }

    #[test]
    fn test_context_preserves_not_found() {
        let err = SkeinError::not_found("product", 7)
            .context("failed to fetch product 7")
            .context("product service: get");

        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(matches!(err.root(), SkeinError::NotFound { id, .. } if id == "7"));
    }

    #[test]
    fn test_context_preserves_other_classes() {
        let err = SkeinError::validation("name must not be empty").context("creating product");
        assert!(!err.is_not_found());
        assert_eq!(err.status_code(), 400);

        let err = SkeinError::Database("connection reset".to_string()).context("listing users");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_context_display_includes_chain() {
        let err = SkeinError::not_found("order", 3).context("loading order");
        let text = err.to_string();
        assert!(text.starts_with("loading order: "));
        assert!(text.contains("order with id 3"));
    }

    #[test]
    fn test_source_chain_is_inspectable() {
        use std::error::Error as _;

        let err = SkeinError::not_found("comment", 1).context("outer");
        let source = err.source().expect("context must expose its source");
        assert!(source.to_string().contains("comment"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<(), SkeinError> = Err(SkeinError::not_found("category", 9));
        let wrapped = result.with_context(|| format!("category {}", 9));
        assert!(wrapped.unwrap_err().is_not_found());

        let ok: Result<u8, SkeinError> = Ok(1);
        assert_eq!(ok.context("unused").unwrap(), 1);
    }

    #[test]
    fn test_error_response_from_client_error() {
        let err = SkeinError::not_found("user", 1).context("service layer");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.message.contains("user"));
        assert!(!response.message.contains("service layer"));
        assert!(response.details.is_none());
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_error_response_hides_server_detail() {
        let err = SkeinError::Database("password authentication failed for user root".to_string());
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "DATABASE_ERROR");
        assert!(!response.message.contains("root"));
    }

    #[test]
    fn test_error_response_with_trace_id_and_details() {
        let err = SkeinError::validation("bad input");
        let details = vec![FieldError {
            field: "email".to_string(),
            message: "Invalid email".to_string(),
            code: "email".to_string(),
        }];
        let response = ErrorResponse::from_error(&err)
            .with_trace_id("req-123")
            .with_details(details);
        assert_eq!(response.trace_id, Some("req-123".to_string()));
        assert_eq!(response.details.map(|d| d.len()), Some(1));
    }
}
