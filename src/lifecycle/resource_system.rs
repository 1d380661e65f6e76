use crate::api::{ApiError, ApiRequest, ApiResponse, ResourceRouter, RouteHandler};
use crate::config::ServiceConfig;
use crate::framework::ResourceClient;
use crate::model::{Product, User};
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, instrument, warn};

/// The runtime orchestrator for the resource API.
///
/// `ResourceSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping one actor per collection
/// - **Routing**: Sending each request to the router for the collection its path names
///
/// # Example
///
/// ```ignore
/// let system = ResourceSystem::new(&ServiceConfig::default());
///
/// let response = system.handle(&ApiRequest::new("GET", "/users/2").with_path_param("id", "2")).await;
/// assert_eq!(response.status_code, 200);
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ResourceSystem {
    /// Client for the User collection
    pub user_client: ResourceClient<User>,

    /// Client for the Product collection
    pub product_client: ResourceClient<Product>,

    routes: Vec<Box<dyn RouteHandler>>,

    /// Prefix stripped from every path before routing
    base_path: String,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ResourceSystem {
    /// Spawns the User and Product actors and builds a router for each.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ServiceConfig) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(config);
        let (product_actor, product_client) = crate::product_actor::new(config);

        let user_handle = tokio::spawn(user_actor.run());
        let product_handle = tokio::spawn(product_actor.run());

        let routes: Vec<Box<dyn RouteHandler>> = vec![
            Box::new(ResourceRouter::new(user_client.clone())),
            Box::new(ResourceRouter::new(product_client.clone())),
        ];

        Self {
            user_client,
            product_client,
            routes,
            base_path: config.base_path.clone(),
            handles: vec![user_handle, product_handle],
        }
    }

    /// Handles one inbound request, picking the collection from the first path segment.
    ///
    /// Paths are matched after removing the configured
    /// [`base_path`](ServiceConfig::base_path). A function mounted under a prefix such as
    /// `/api` must set it, otherwise every request answers 404 "Resource not found".
    #[instrument(skip_all, fields(method = %request.http_method, path = %request.path))]
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let scoped;
        let request = if self.base_path.is_empty() {
            request
        } else {
            match request.strip_base_path(&self.base_path) {
                Some(inner) => {
                    scoped = inner;
                    &scoped
                }
                None => {
                    warn!(base_path = %self.base_path, "Path outside base path");
                    return ApiError::UnknownResource.into_response();
                }
            }
        };

        let resource = request.resource();
        match self
            .routes
            .iter()
            .find(|route| Some(route.collection()) == resource)
        {
            Some(route) => route.handle(request).await,
            None => {
                warn!(?resource, "No collection for path");
                ApiError::UnknownResource.into_response()
            }
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients and routers closes every actor channel; each actor then drains
    /// its queue and exits. Returns the first join error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.routes);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            handle.await?;
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
