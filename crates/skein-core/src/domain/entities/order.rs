//! Order entity.

use crate::{RecordId, Resource};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer order.
///
/// `total` is supplied by the caller. Line items are not modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    /// Owning account.
    pub user_id: RecordId,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Free-form status, e.g. `pending` or `completed`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Status given to orders created without one.
    pub const DEFAULT_STATUS: &'static str = "pending";

    /// Returns true if the order belongs to the given account.
    #[must_use]
    pub const fn is_owned_by(&self, user_id: RecordId) -> bool {
        self.user_id == user_id
    }
}

impl Resource for Order {
    const NAME: &'static str = "order";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
