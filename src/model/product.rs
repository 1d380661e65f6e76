use crate::framework::RecordId;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A product in the catalogue.
///
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor) through the
/// [`ResourceEntity`](crate::framework::ResourceEntity) impl in [`crate::product_actor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally allocated by the store)
    /// * `name` - Product name
    /// * `description` - Free-form description
    /// * `price` - Unit price
    /// * `category` - Category used by the list filter
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }
}

/// Payload for creating a product. Missing and `null` fields decode as empty / zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCreate {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

/// Payload for updating a product.
///
/// Empty strings and non-positive prices count as "not supplied".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

/// List filter built from the `category` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFilter {
    pub category: String,
}
