//! Comment entity.

use crate::{RecordId, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product review left by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub product_id: RecordId,
    /// Author account.
    pub user_id: RecordId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for Comment {
    const NAME: &'static str = "comment";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
