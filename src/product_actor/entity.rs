//! [`ResourceEntity`] implementation for the [`Product`] record.
//!
//! Products are the one resource with rules of their own:
//!
//! - creation requires a non-empty name and a price above zero;
//! - updates ignore a non-positive price instead of rejecting it;
//! - listings can be narrowed with the `category` query parameter.

use super::error::ProductError;
use crate::framework::{set_if_present, RecordId, ResourceEntity};
use crate::model::{Product, ProductCreate, ProductFilter, ProductUpdate};
use std::collections::HashMap;

impl ResourceEntity for Product {
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Error = ProductError;

    const KIND: &'static str = "Product";
    const SINGULAR: &'static str = "product";
    const COLLECTION: &'static str = "products";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_create_params(id: RecordId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.is_empty() || params.price <= 0.0 {
            return Err(ProductError::MissingNameOrPrice);
        }
        Ok(Self::new(
            id,
            params.name,
            params.description,
            params.price,
            params.category,
        ))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`, `description`, `category`: when non-empty
    /// - `price`: when strictly positive
    fn on_update(&mut self, update: ProductUpdate) {
        set_if_present(&mut self.name, update.name);
        set_if_present(&mut self.description, update.description);
        set_if_present(&mut self.category, update.category);
        if let Some(price) = update.price.filter(|price| *price > 0.0) {
            self.price = price;
        }
    }

    fn filter_from_query(query: &HashMap<String, String>) -> Option<ProductFilter> {
        query
            .get("category")
            .filter(|category| !category.is_empty())
            .map(|category| ProductFilter {
                category: category.clone(),
            })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        self.category == filter.category
    }
}
