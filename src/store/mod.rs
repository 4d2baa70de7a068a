//! # Record Store
//!
//! Abstract contract for storing and querying dog records. The store
//! exclusively owns identity assignment and durable storage; the query
//! engine and validation pipeline only ever see borrowed snapshots.
//!
//! Implementations must be internally consistent under concurrent access:
//! each `all()` returns a point-in-time snapshot, and `insert` either
//! persists a whole record or nothing.

pub mod errors;
pub mod memory;

use async_trait::async_trait;

use crate::dogs::{Dog, NewDog};

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryDogStore;

/// Contract for a dog record store.
///
/// Any durable store with simple equality/range/sort queries suffices; this
/// service ships an in-memory implementation and treats the engine choice as
/// a deployment concern.
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Snapshot of all records, in insertion (identity) order.
    async fn all(&self) -> StoreResult<Vec<Dog>>;

    /// Assign the next identity and persist the candidate.
    ///
    /// Enforces a unique constraint on `Name`: a candidate whose name is
    /// already present fails with [`StoreError::DuplicateName`] and leaves
    /// no partial write behind.
    async fn insert(&self, candidate: NewDog) -> StoreResult<Dog>;
}
