//! # Resource API
//!
//! > **CRUD endpoints for users and products, served from in-memory actors behind a
//! > function-as-a-service adapter.**
//!
//! Each collection is owned by a generic [`ResourceActor`](framework::ResourceActor) and
//! reached through a [`ResourceClient`](framework::ResourceClient). A generic
//! [`ResourceRouter`](api::ResourceRouter) turns inbound events into one of four operations
//! and wraps the outcome in a uniform `{success, data | error}` envelope.
//!
//! ## 🏗️ Design
//!
//! ### One router, many record types
//! You'll see `ResourceRouter<T: ResourceEntity>` and `ResourceActor<T: ResourceEntity>`
//! everywhere. The request handling, the store and the envelopes are written **once**;
//! a record type only says how it is identified, validated on create and merged on update.
//! See [`ResourceEntity`](framework::ResourceEntity).
//!
//! ### State lives in one task per collection
//! Each actor owns its store outright and processes requests one at a time, so the store
//! needs no locks. The store is an explicit value handed to the actor, which means tests
//! build isolated collections instead of sharing a global one.
//!
//! ### Errors are responses
//! Bad identifiers, malformed bodies, failed validation and missing records are all
//! [`ApiError`](api::ApiError) values rendered as error envelopes. The host only ever sees
//! a successful invocation.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the engine: entity trait, store, actor, client, mocks.
//! - [`model`] - `User` / `Product` records and their request payloads.
//! - [`user_actor`], [`product_actor`] - the two `ResourceEntity` impls and seed data.
//! - [`api`] - boundary types, router, handlers, envelope, errors.
//! - [`lifecycle`] - [`ResourceSystem`](lifecycle::ResourceSystem) wiring and tracing setup.
//! - [`config`] - environment-driven [`ServiceConfig`](config::ServiceConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the function locally with info logs
//! RUST_LOG=info cargo run
//!
//! # Never reuse identifiers freed by deletes
//! RESOURCE_API_ID_STRATEGY=counter cargo run
//! ```

pub mod api;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
