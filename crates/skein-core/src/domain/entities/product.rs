//! Catalog item entity.

use crate::domain::value_objects::ProductType;
use crate::{RecordId, Resource};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item.
///
/// One flat record for every kind of item. `product_type` is the
/// discriminator; the variant attributes that it does not require stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: RecordId,
    #[serde(rename = "type")]
    pub product_type: String,
    pub composition: Option<String>,
    /// Yarn origin.
    pub origin: Option<String>,
    /// Yarn length in metres.
    pub length: Option<i32>,
    /// Garment size label.
    pub size: Option<String>,
    /// Garment length in centimetres.
    pub garment_length: Option<i32>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Parses the discriminator, if it is a known kind.
    #[must_use]
    pub fn kind(&self) -> Option<ProductType> {
        self.product_type.parse().ok()
    }
}

impl Resource for Product {
    const NAME: &'static str = "product";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
