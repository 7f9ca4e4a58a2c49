//! Product data access.

use super::RecordDao;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use skein_core::{Page, PageRequest, Product, RecordId, SkeinResult};

/// Catalog search filters. Absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Exact discriminator.
    pub product_type: Option<String>,
    pub category_id: Option<RecordId>,
    /// Case-insensitive exact color.
    pub color: Option<String>,
}

impl ProductFilter {
    /// Checks a product against the filter, with the store's semantics.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name.as_ref().map_or(true, |name| {
            product.name.to_lowercase().contains(&name.to_lowercase())
        });
        let type_ok = self
            .product_type
            .as_ref()
            .map_or(true, |t| product.product_type == *t);
        let category_ok = self
            .category_id
            .map_or(true, |id| product.category_id == id);
        let color_ok = self.color.as_ref().map_or(true, |color| {
            product
                .color
                .as_ref()
                .is_some_and(|c| c.eq_ignore_ascii_case(color))
        });

        name_ok && type_ok && category_ok && color_ok
    }
}

#[async_trait]
pub trait ProductDao: RecordDao<Product> {
    /// Returns every matching product ordered by id.
    async fn find_by_filter(&self, filter: &ProductFilter) -> SkeinResult<Vec<Product>>;

    /// Returns one page of matching products ordered by id, plus the total
    /// number of matches.
    async fn search(&self, filter: &ProductFilter, page: PageRequest)
        -> SkeinResult<Page<Product>>;
}
