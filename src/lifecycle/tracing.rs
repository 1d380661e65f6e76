//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing` subscriber for the whole process.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with the crate/module prefix hidden (`with_target(false)`);
//!   log lines carry `entity_type` instead
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` with the collection size
//! - **Requests**: `Processing GET /users/2` inside a span holding method, path and entity type
//! - **Store Operations**: `Created`, `Updated`, `Deleted`, `Not found` with the record id
//! - **Rejections**: status and message of every error envelope (debug level)
//!
//! ```bash
//! RUST_LOG=info ./resource-api
//!
//! # Include payloads of create/update requests
//! RUST_LOG=debug ./resource-api
//! ```

/// Initializes the process-wide subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
