//! Generic actor framework for resource collections.
//!
//! # Main Components
//!
//! - [`ResourceEntity`] - Trait that record types implement to be managed by actors
//! - [`ResourceStore`] - Ordered in-memory collection with identifier allocation
//! - [`ResourceActor`] - Task that owns a store and processes requests sequentially
//! - [`ResourceClient`] - Type-safe, cloneable handle for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test callers without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::{set_if_present, RecordId, ResourceEntity};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{IdStrategy, ResourceStore};
