//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur while creating a product.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The name was empty or the price was not strictly positive.
    #[error("Name and valid price are required")]
    MissingNameOrPrice,
}
