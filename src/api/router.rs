//! Request router.
//!
//! [`ResourceRouter`] maps the HTTP method onto one of the four [`handlers`](super::handlers)
//! and wraps the outcome in an envelope. It is generic over the record type and holds
//! nothing but a client for that record's collection.

use super::{envelope, handlers, ApiError, ApiRequest, ApiResponse};
use crate::framework::{ResourceClient, ResourceEntity};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Something that can answer requests for one collection.
///
/// Lets the [`ResourceSystem`](crate::lifecycle::ResourceSystem) hold routers for
/// different record types side by side.
#[async_trait]
pub trait RouteHandler: Send + Sync {
    /// Collection served, matched against the first path segment.
    fn collection(&self) -> &'static str;

    /// Handles a request addressed to this collection. Never fails; errors become envelopes.
    async fn handle(&self, request: &ApiRequest) -> ApiResponse;
}

/// Router for the collection of `T` records.
#[derive(Clone)]
pub struct ResourceRouter<T: ResourceEntity> {
    client: ResourceClient<T>,
}

impl<T: ResourceEntity> ResourceRouter<T> {
    pub fn new(client: ResourceClient<T>) -> Self {
        Self { client }
    }

    /// Dispatches on the method and returns the `data` payload or the error to report.
    pub async fn route(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        match request.http_method.as_str() {
            "GET" => handlers::list_or_get(&self.client, request).await,
            "POST" => handlers::create(&self.client, request).await,
            "PUT" => handlers::update(&self.client, request).await,
            "DELETE" => handlers::delete(&self.client, request).await,
            _ => Err(ApiError::MethodNotAllowed),
        }
    }
}

#[async_trait]
impl<T: ResourceEntity> RouteHandler for ResourceRouter<T> {
    fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    #[instrument(skip_all, fields(entity_type = T::KIND))]
    async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        info!("Processing {} {}", request.http_method, request.path);
        match self.route(request).await {
            Ok(data) => envelope::success(&data),
            Err(e) => {
                debug!(status = e.status_code(), error = %e, "Request rejected");
                e.into_response()
            }
        }
    }
}
