//! HTTP-style adapter between the function host and the resource actors.
//!
//! - [`request`] - inbound/outbound boundary types
//! - [`router`] - method dispatch ([`ResourceRouter`], [`RouteHandler`])
//! - [`handlers`] - the four operations, generic over the record type
//! - [`envelope`] - `{success, data | error}` response bodies and fixed headers
//! - [`error`] - [`ApiError`] and its status codes

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod request;
pub mod router;

pub use error::ApiError;
pub use request::{ApiRequest, ApiResponse};
pub use router::{ResourceRouter, RouteHandler};
