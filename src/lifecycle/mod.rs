//! Process wiring: starting the actors, routing requests to them, and logging setup.
//!
//! - [`ResourceSystem`] - spawns one actor per collection and dispatches requests by path
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod resource_system;
pub mod tracing;

pub use self::resource_system::*;
pub use self::tracing::setup_tracing;
