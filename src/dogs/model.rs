//! Dog record wire types
//!
//! Field casing on the wire is PascalCase (`Name`, `TailLength`, ...); the
//! numeric `Id` is assigned by the store and never supplied by the client.

use serde::{Deserialize, Serialize};

/// A persisted dog record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Store-assigned identity, also the tie-break key for sorted listings
    #[serde(rename = "Id")]
    pub id: u64,

    #[serde(rename = "Name")]
    pub name: String,

    /// Free text, no invariant enforced
    #[serde(rename = "Color")]
    pub color: String,

    #[serde(rename = "TailLength")]
    pub tail_length: i64,

    #[serde(rename = "Weight")]
    pub weight: i64,
}

/// A candidate record submitted for creation, not yet validated or persisted.
///
/// Missing `Name`, `TailLength`, or `Weight` fails structural decoding before
/// the validation pipeline runs; `Color` defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDog {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Color", default)]
    pub color: String,

    #[serde(rename = "TailLength")]
    pub tail_length: i64,

    #[serde(rename = "Weight")]
    pub weight: i64,
}

impl NewDog {
    /// Materialize a record with its store-assigned identity
    pub fn into_dog(self, id: u64) -> Dog {
        Dog {
            id,
            name: self.name,
            color: self.color,
            tail_length: self.tail_length,
            weight: self.weight,
        }
    }
}
