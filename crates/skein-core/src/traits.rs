//! Core traits shared across layers.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Store-generated identifier of every persisted record.
pub type RecordId = i64;

/// A persisted resource type served through the cache-aside engine.
///
/// The serde implementations double as the cache snapshot format, so they
/// must round-trip every field.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource name, used as the cache key prefix and in error messages.
    const NAME: &'static str;

    /// Returns the record identifier.
    fn id(&self) -> RecordId;

    /// Writes a store-generated identifier back onto the record.
    fn set_id(&mut self, id: RecordId);

    /// Returns the cache key for the record with the given id.
    #[must_use]
    fn cache_key(id: RecordId) -> String {
        format!("{}:{id}", Self::NAME)
    }
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is degraded but functional.
    Degraded(String),
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Returns true if the status is unhealthy.
    #[must_use]
    pub const fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy(_))
    }

    /// Returns a short label for status reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "up",
            Self::Degraded(_) => "degraded",
            Self::Unhealthy(_) => "down",
        }
    }
}
