//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::framework::ResourceClient)
//! and its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::{FrameworkError, RecordId, ResourceEntity};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor owning a collection.
///
/// The variants map one-to-one onto the resource operations:
///
/// - **List**: every record in collection order, optionally filtered.
/// - **Get**: a single record by ID (`None` when absent).
/// - **Create**: allocate an ID, validate, append. Responds with the stored record.
/// - **Update**: merge a partial update. Responds with the updated record.
/// - **Delete**: remove a record, keeping the order of the rest.
///
/// Generic over `T: ResourceEntity`, so a `Product` payload can never reach a `User` actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ResourceEntity> {
    List {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: RecordId,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: RecordId,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: RecordId,
        respond_to: Response<()>,
    },
}
