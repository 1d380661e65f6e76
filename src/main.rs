//! Function entry point: wires the [`ResourceSystem`] into the Lambda runtime.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use resource_api::api::{ApiRequest, ApiResponse};
use resource_api::config::ServiceConfig;
use resource_api::lifecycle::{setup_tracing, ResourceSystem};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = ServiceConfig::load();
    info!(?config, "Starting resource API");

    // Collections live as long as the process; a cold start resets them to the seed data.
    let system = Arc::new(ResourceSystem::new(&config));

    run(service_fn(move |event: LambdaEvent<ApiRequest>| {
        let system = Arc::clone(&system);
        async move { Ok::<ApiResponse, Error>(system.handle(&event.payload).await) }
    }))
    .await
}
