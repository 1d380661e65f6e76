//! # Resource Store
//!
//! The ordered, in-memory collection behind each [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Records keep insertion order: creates append, updates merge in place and deletes
//! remove a single element without reordering the rest. The store is a plain value with
//! synchronous methods; exclusive access comes from the actor that owns it.
//!
//! ## Identifier allocation
//!
//! New IDs come from [`IdStrategy`]:
//!
//! - [`IdStrategy::Length`] hands out `len + 1`, the historical numbering. After a delete
//!   that candidate can belong to a live record (delete `1` out of `[1, 2, 3]` and the next
//!   candidate is `3`), so a taken candidate falls back to `max_id + 1`.
//! - [`IdStrategy::Counter`] hands out a monotonic counter seeded past the largest existing
//!   ID and never reuses a value, even one freed by a delete.

use crate::framework::{RecordId, ResourceEntity};
use serde::{Deserialize, Serialize};

/// Policy used to pick the ID of a newly created record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `len + 1`, falling back to `max_id + 1` when that ID is still in use.
    #[default]
    Length,
    /// Monotonic counter; freed IDs are never handed out again.
    Counter,
}

/// Ordered collection of records for one entity type.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: ResourceEntity> {
    records: Vec<T>,
    strategy: IdStrategy,
    next_id: RecordId,
}

impl<T: ResourceEntity> ResourceStore<T> {
    /// Creates an empty store.
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_records(strategy, Vec::new())
    }

    /// Creates a store pre-populated with `records`, kept in the given order.
    pub fn with_records(strategy: IdStrategy, records: Vec<T>) -> Self {
        let next_id = max_id(&records) + 1;
        Self {
            records,
            strategy,
            next_id,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in collection order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Clones the records passing `filter` (all of them when `None`), in collection order.
    pub fn list(&self, filter: Option<&T::Filter>) -> Vec<T> {
        match filter {
            Some(filter) => self
                .records
                .iter()
                .filter(|record| record.matches(filter))
                .cloned()
                .collect(),
            None => self.records.clone(),
        }
    }

    /// First record with the given ID.
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// The ID the next successful create will receive.
    pub fn next_id(&self) -> RecordId {
        match self.strategy {
            IdStrategy::Length => {
                let candidate = self.records.len() as RecordId + 1;
                if self.get(candidate).is_some() {
                    max_id(&self.records) + 1
                } else {
                    candidate
                }
            }
            IdStrategy::Counter => self.next_id,
        }
    }

    /// Validates and appends a new record. Nothing is stored (and no ID is consumed) on error.
    pub fn create(&mut self, params: T::Create) -> Result<T, T::Error> {
        let id = self.next_id();
        let record = T::from_create_params(id, params)?;
        self.next_id = id + 1;
        self.records.push(record.clone());
        Ok(record)
    }

    /// Merges `update` into the record with the given ID and returns the result.
    pub fn update(&mut self, id: RecordId, update: T::Update) -> Option<T> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        record.on_update(update);
        Some(record.clone())
    }

    /// Removes the record with the given ID, preserving the order of the others.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }
}

fn max_id<T: ResourceEntity>(records: &[T]) -> RecordId {
    records.iter().map(T::id).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductCreate, ProductFilter, User, UserCreate, UserUpdate};

    fn seeded(strategy: IdStrategy) -> ResourceStore<User> {
        ResourceStore::with_records(
            strategy,
            vec![
                User::new(1, "Alice", "alice@example.com"),
                User::new(2, "Bob", "bob@example.com"),
                User::new(3, "Charlie", "charlie@example.com"),
            ],
        )
    }

    fn dora() -> UserCreate {
        UserCreate {
            name: "Dora".to_string(),
            email: "d@x.com".to_string(),
        }
    }

    fn ids(store: &ResourceStore<User>) -> Vec<RecordId> {
        store.records().iter().map(|user| user.id).collect()
    }

    #[test]
    fn test_create_assigns_length_plus_one() {
        let mut store = seeded(IdStrategy::Length);
        let created = store.create(dora()).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(4), Some(&created));
    }

    #[test]
    fn test_length_strategy_reuses_freed_tail_id() {
        let mut store = seeded(IdStrategy::Length);
        store.remove(3).unwrap();
        let created = store.create(dora()).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_length_strategy_skips_taken_id() {
        let mut store = seeded(IdStrategy::Length);
        store.remove(1).unwrap();
        // len + 1 == 3 is still held by Charlie
        let created = store.create(dora()).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(ids(&store), vec![2, 3, 4]);
    }

    #[test]
    fn test_counter_strategy_never_reuses() {
        let mut store = seeded(IdStrategy::Counter);
        store.remove(3).unwrap();
        assert_eq!(store.create(dora()).unwrap().id, 4);
        assert_eq!(store.create(dora()).unwrap().id, 5);
    }

    #[test]
    fn test_failed_create_consumes_nothing() {
        let mut store: ResourceStore<Product> = ResourceStore::new(IdStrategy::Counter);
        let invalid = ProductCreate {
            name: "Pen".to_string(),
            price: 0.0,
            ..Default::default()
        };
        assert!(store.create(invalid).is_err());
        assert!(store.is_empty());

        let valid = ProductCreate {
            name: "Pen".to_string(),
            price: 1.5,
            ..Default::default()
        };
        assert_eq!(store.create(valid).unwrap().id, 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = seeded(IdStrategy::Length);
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "Bob");
        assert_eq!(ids(&store), vec![1, 3]);
        assert!(store.remove(2).is_none());
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_update_merges_in_place() {
        let mut store = seeded(IdStrategy::Length);
        let update = UserUpdate {
            name: Some("Alicia".to_string()),
            email: Some(String::new()),
        };
        let updated = store.update(1, update).unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alice@example.com");
        assert_eq!(store.get(1), Some(&updated));
        assert!(store.update(99, UserUpdate::default()).is_none());
    }

    #[test]
    fn test_list_filter_keeps_order() {
        let store = ResourceStore::with_records(
            IdStrategy::Length,
            vec![
                Product::new(1, "MacBook Pro", "Apple laptop", 2999.99, "Electronics"),
                Product::new(2, "Coffee Mug", "Ceramic mug", 15.99, "Home"),
                Product::new(3, "iPhone 15", "Apple smartphone", 999.99, "Electronics"),
            ],
        );
        let filter = ProductFilter {
            category: "Electronics".to_string(),
        };
        let listed: Vec<RecordId> = store.list(Some(&filter)).iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![1, 3]);
        assert_eq!(store.list(None).len(), 3);
    }
}
