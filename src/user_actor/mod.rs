//! User-specific resource logic and entity implementation.

pub mod entity;

use crate::config::ServiceConfig;
use crate::framework::{ResourceActor, ResourceClient, ResourceStore};
use crate::model::User;

/// Records every user collection starts with.
pub fn seed() -> Vec<User> {
    vec![
        User::new(1, "Alice", "alice@example.com"),
        User::new(2, "Bob", "bob@example.com"),
        User::new(3, "Charlie", "charlie@example.com"),
    ]
}

/// Creates a new User actor and its client.
pub fn new(config: &ServiceConfig) -> (ResourceActor<User>, ResourceClient<User>) {
    let records = if config.seed { seed() } else { Vec::new() };
    let store = ResourceStore::with_records(config.id_strategy, records);
    ResourceActor::new(config.buffer_size, store)
}
