//! Category entity.

use crate::{RecordId, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog category. Products reference it by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    /// Optional grouping label.
    #[serde(rename = "type")]
    pub category_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Resource for Category {
    const NAME: &'static str = "category";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
