//! Product and category DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use skein_core::{Category, PageRequest, Product, RecordId, SkeinResult};
use skein_repository::ProductFilter;

/// Product body for create and full replace.
///
/// Business rules (positive price, variant fields per `type`) are checked
/// on the resulting [`Product`] by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: RecordId,
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub length: Option<i32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub garment_length: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductRequest {
    /// Builds an unsaved product.
    #[must_use]
    pub fn into_product(self) -> Product {
        self.apply_to(Product {
            id: 0,
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            category_id: 0,
            product_type: String::new(),
            composition: None,
            origin: None,
            length: None,
            size: None,
            garment_length: None,
            color: None,
            image_url: None,
            created_at: chrono::Utc::now(),
        })
    }

    /// Replaces every client-owned field of `product`, keeping id and timestamp.
    #[must_use]
    pub fn apply_to(self, product: Product) -> Product {
        Product {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
            product_type: self.product_type,
            composition: self.composition,
            origin: self.origin,
            length: self.length,
            size: self.size,
            garment_length: self.garment_length,
            color: self.color,
            image_url: self.image_url,
            ..product
        }
    }
}

/// Query string of `GET /products/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSearchQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub category_id: Option<RecordId>,
    pub color: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductSearchQuery {
    #[must_use]
    pub fn filter(&self) -> ProductFilter {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        };
        ProductFilter {
            name: non_empty(&self.name),
            product_type: non_empty(&self.product_type),
            category_id: self.category_id,
            color: non_empty(&self.color),
        }
    }

    /// Page 1 and 20 items unless given; out-of-range values are rejected.
    pub fn page_request(&self) -> SkeinResult<PageRequest> {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub category_id: Option<RecordId>,
}

/// Category body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

impl CategoryRequest {
    #[must_use]
    pub fn into_category(self) -> Category {
        Category {
            id: 0,
            name: self.name,
            category_type: self.category_type,
            created_at: chrono::Utc::now(),
        }
    }

    #[must_use]
    pub fn apply_to(self, category: Category) -> Category {
        Category {
            name: self.name,
            category_type: self.category_type,
            ..category
        }
    }
}
