//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns one [`ResourceStore`] and
//! processes every request against it sequentially.

use crate::framework::{FrameworkError, ResourceClient, ResourceEntity, ResourceRequest, ResourceStore};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor handles one message at a time, to completion, before looking at the next.
/// The store is never shared, so there is no `Mutex` or `RwLock` around it. Identifier
/// allocation happens inside this loop as well.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Hand clones of the client to whoever needs the collection.
///
/// The loop exits once every client has been dropped.
pub struct ResourceActor<T: ResourceEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
}

impl<T: ResourceEntity> ResourceActor<T> {
    pub fn new(buffer_size: usize, store: ResourceStore<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { filter, respond_to } => {
                    let records = self.store.list(filter.as_ref());
                    debug!(entity_type, ?filter, count = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match self.store.create(params) {
                        Ok(item) => {
                            info!(entity_type, id = item.id(), size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, id, ?update, "Update");
                    match self.store.update(id, update) {
                        Some(item) => {
                            info!(entity_type, id, "Updated");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id)));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, id, "Delete");
                    if self.store.remove(id).is_some() {
                        info!(entity_type, id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id)));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::IdStrategy;
    use crate::model::{User, UserCreate, UserUpdate};

    #[tokio::test]
    async fn test_resource_actor_crud() {
        let (actor, client) = ResourceActor::<User>::new(10, ResourceStore::new(IdStrategy::Length));
        let handle = tokio::spawn(actor.run());

        // 1. Create
        let payload = UserCreate {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let user = client.create(payload).await.unwrap();
        assert_eq!(user.id, 1);

        // 2. Get
        let fetched = client.get(user.id).await.unwrap();
        assert_eq!(fetched, Some(user.clone()));

        // 3. Update
        let update = UserUpdate {
            name: Some("Bob".into()),
            ..Default::default()
        };
        let updated = client.update(user.id, update).await.unwrap();
        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.email, "alice@example.com");

        // 4. List
        assert_eq!(client.list(None).await.unwrap(), vec![updated]);

        // 5. Delete
        client.delete(user.id).await.unwrap();
        assert!(client.get(user.id).await.unwrap().is_none());
        assert!(matches!(
            client.delete(user.id).await,
            Err(FrameworkError::NotFound(1))
        ));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let (actor, client) = ResourceActor::<User>::new(10, ResourceStore::new(IdStrategy::Length));
        tokio::spawn(actor.run());

        let result = client.update(7, UserUpdate::default()).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(7))));
    }
}
