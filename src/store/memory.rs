//! In-memory record store
//!
//! Process-lifetime storage over a `RwLock`ed vector. Identity is a
//! monotonically increasing counter starting at 1, so identity order is
//! insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::DogStore;
use crate::dogs::{Dog, NewDog};

struct Inner {
    records: Vec<Dog>,
    next_id: u64,
}

/// In-memory [`DogStore`] implementation
pub struct MemoryDogStore {
    inner: RwLock<Inner>,
}

impl MemoryDogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with records, assigning fresh ids
    pub async fn seeded(candidates: Vec<NewDog>) -> StoreResult<Self> {
        let store = Self::new();
        for candidate in candidates {
            store.insert(candidate).await?;
        }
        Ok(store)
    }
}

impl Default for MemoryDogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogStore for MemoryDogStore {
    async fn all(&self) -> StoreResult<Vec<Dog>> {
        let inner = self.inner.read().await;
        Ok(inner.records.clone())
    }

    async fn insert(&self, candidate: NewDog) -> StoreResult<Dog> {
        let mut inner = self.inner.write().await;

        // Unique constraint on Name, checked under the write lock so two
        // concurrent inserts with the same name cannot both land.
        if inner.records.iter().any(|d| d.name == candidate.name) {
            return Err(StoreError::DuplicateName {
                name: candidate.name,
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let dog = candidate.into_dog(id);
        inner.records.push(dog.clone());
        Ok(dog)
    }
}
