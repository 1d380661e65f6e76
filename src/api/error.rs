//! API error taxonomy.
//!
//! Every variant ends the current request and is reported to the caller as an error
//! envelope via [`ApiError::into_response`]; none of them reach the host as a failed
//! invocation.

use super::{envelope, ApiResponse};
use crate::framework::{FrameworkError, ResourceEntity};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The HTTP method has no operation.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The path does not name a known collection.
    #[error("Resource not found")]
    UnknownResource,

    /// Update or delete without an identifier. `entity` is the capitalized kind.
    #[error("{entity} ID is required")]
    MissingId { entity: &'static str },

    /// Identifier is not an integer. `entity` is the lower-case singular name.
    #[error("Invalid {entity} ID")]
    InvalidId { entity: &'static str },

    /// Body is not well-formed JSON for the expected payload.
    #[error("Invalid JSON body")]
    InvalidBody,

    /// Entity-specific rule rejected the payload.
    #[error("{0}")]
    Validation(String),

    /// No record with the requested identifier.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// The collection's actor is gone or a payload could not be serialized.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MethodNotAllowed => 405,
            ApiError::UnknownResource | ApiError::NotFound { .. } => 404,
            ApiError::MissingId { .. }
            | ApiError::InvalidId { .. }
            | ApiError::InvalidBody
            | ApiError::Validation(_) => 400,
            ApiError::Internal => 500,
        }
    }

    pub fn missing_id<T: ResourceEntity>() -> Self {
        ApiError::MissingId { entity: T::KIND }
    }

    pub fn invalid_id<T: ResourceEntity>() -> Self {
        ApiError::InvalidId {
            entity: T::SINGULAR,
        }
    }

    pub fn not_found<T: ResourceEntity>() -> Self {
        ApiError::NotFound { entity: T::KIND }
    }

    /// Maps a client error for collection `T` onto the API taxonomy.
    pub fn from_framework<T: ResourceEntity>(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => Self::not_found::<T>(),
            FrameworkError::EntityError(e) => ApiError::Validation(e.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                error!(entity_type = T::KIND, error = %e, "Resource actor unavailable");
                ApiError::Internal
            }
        }
    }

    /// Error envelope carrying this error's status and message.
    pub fn into_response(self) -> ApiResponse {
        envelope::error(self.status_code(), &self.to_string())
    }
}
