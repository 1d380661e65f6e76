//! # ResourceEntity Trait
//!
//! The contract every record type (User, Product) implements to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor) and served by the generic
//! [`ResourceRouter`](crate::api::ResourceRouter).
//!
//! The trait captures exactly the three things that differ between record types:
//!
//! - **Identify**: [`ResourceEntity::id`] plus the naming constants used in routes and messages.
//! - **Validate on create**: [`ResourceEntity::from_create_params`] builds the record and may reject it.
//! - **Merge on update**: [`ResourceEntity::on_update`] applies a partial update in place.
//!
//! Everything else (dispatch, storage, envelopes) is written once against this trait.
//!
//! We use associated types for the payloads so that a `User` store only ever accepts a
//! `UserCreate` body. Sending a `ProductCreate` to it does not compile.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

/// Integer identifier shared by every record type.
pub type RecordId = i64;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
pub trait ResourceEntity: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Body decoded for a create request. An `id` in the body is never read.
    ///
    /// A `null` body decodes as `Default::default()`.
    type Create: DeserializeOwned + Default + Debug + Send + Sync;

    /// Body decoded for a partial update. Fields left empty mean "unchanged".
    type Update: DeserializeOwned + Default + Debug + Send + Sync;

    /// Optional list filter built from query-string parameters.
    ///
    /// It is serialized into the list payload next to `total`, so a category filter
    /// shows up as `"category": "..."`. Use `()` if the resource cannot be filtered.
    type Filter: Serialize + Debug + Send + Sync;

    /// Validation error raised by [`ResourceEntity::from_create_params`].
    /// Use [`std::convert::Infallible`] when creation never fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Capitalized entity name used in messages ("User").
    const KIND: &'static str;

    /// Singular key wrapping the record in create/update payloads ("user").
    const SINGULAR: &'static str;

    /// Collection name, used both as the route segment and the list payload key ("users").
    const COLLECTION: &'static str;

    /// The record's identifier.
    fn id(&self) -> RecordId;

    /// Construct the record from the allocated ID and the decoded create body.
    fn from_create_params(id: RecordId, params: Self::Create) -> Result<Self, Self::Error>;

    /// Merge a partial update into the stored record.
    fn on_update(&mut self, update: Self::Update);

    /// Build a list filter from the query string. `None` lists everything.
    fn filter_from_query(_query: &HashMap<String, String>) -> Option<Self::Filter> {
        None
    }

    /// Whether this record passes the given filter.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }
}

/// Overwrites `field` with `value` when it carries a non-empty string.
///
/// Update payloads use this for every text field: absent, `null` and `""` all leave the
/// stored value alone.
pub fn set_if_present(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        *field = value;
    }
}
