//! Product-specific resource logic: creation rules and category filtering.

pub mod entity;
pub mod error;

pub use error::*;

use crate::config::ServiceConfig;
use crate::framework::{ResourceActor, ResourceClient, ResourceStore};
use crate::model::Product;

/// Records every product collection starts with.
pub fn seed() -> Vec<Product> {
    vec![
        Product::new(1, "MacBook Pro", "Apple laptop", 2999.99, "Electronics"),
        Product::new(2, "iPhone 15", "Apple smartphone", 999.99, "Electronics"),
        Product::new(3, "Coffee Mug", "Ceramic mug", 15.99, "Home"),
    ]
}

/// Creates a new Product actor and its client.
pub fn new(config: &ServiceConfig) -> (ResourceActor<Product>, ResourceClient<Product>) {
    let records = if config.seed { seed() } else { Vec::new() };
    let store = ResourceStore::with_records(config.id_strategy, records);
    ResourceActor::new(config.buffer_size, store)
}
