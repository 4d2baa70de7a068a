//! Dog HTTP Routes
//!
//! The three API operations: liveness ping, paginated listing, and record
//! creation. Each handler is a thin composition over the query engine,
//! validation pipeline, and record store.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::dogs::{self, Dog, NewDog};
use crate::query::{self, DogQuery};
use crate::store::{DogStore, MemoryDogStore, StoreError};

/// Version string returned by the liveness probe
pub const SERVICE_VERSION: &str = "Dogshouseservice.Version1.0.1";

// ==================
// Shared State
// ==================

/// State shared across the dog handlers
pub struct DogState {
    pub store: Arc<dyn DogStore>,
}

impl DogState {
    /// State backed by a fresh in-memory store
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryDogStore::new()),
        }
    }

    /// State over an existing store
    pub fn with_store(store: Arc<dyn DogStore>) -> Self {
        Self { store }
    }
}

impl Default for DogState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Dog Routes
// ==================

/// Create the dog API routes
pub fn dog_routes(state: Arc<DogState>) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/dogs", get(list_dogs_handler))
        .route("/dog", post(create_dog_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Liveness probe; no inputs, no side effects, always succeeds.
async fn ping_handler() -> impl IntoResponse {
    (StatusCode::OK, SERVICE_VERSION)
}

/// List records, sorted and paginated per the query string.
async fn list_dogs_handler(
    State(state): State<Arc<DogState>>,
    Query(params): Query<DogQuery>,
) -> Result<Json<Vec<Dog>>, Response> {
    let snapshot = state.store.all().await.map_err(store_failure)?;
    Ok(Json(query::apply(snapshot, &params)))
}

/// Create a record after structural decoding and the validation pipeline.
///
/// Decode failures (malformed JSON, missing fields) are rejected with the
/// framework diagnostic before the pipeline runs. Validation is performed
/// against a snapshot before any mutation; the store's unique constraint
/// catches the name race two concurrent creates could otherwise win
/// together, and maps to the same canonical reason.
async fn create_dog_handler(
    State(state): State<Arc<DogState>>,
    payload: Result<Json<NewDog>, JsonRejection>,
) -> Result<Response, Response> {
    let Json(candidate) = payload.map_err(malformed_payload)?;

    let snapshot = state.store.all().await.map_err(store_failure)?;
    dogs::validate(&candidate, &snapshot)
        .map_err(|reason| (StatusCode::BAD_REQUEST, reason.to_string()).into_response())?;

    let created = state.store.insert(candidate).await.map_err(|e| match e {
        StoreError::DuplicateName { .. } => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        other => store_failure(other),
    })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/dogs")],
        Json(created),
    )
        .into_response())
}

// ==================
// Error Mapping
// ==================

fn malformed_payload(rejection: JsonRejection) -> Response {
    (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
}

fn store_failure(error: StoreError) -> Response {
    tracing::error!(%error, "record store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, "Record store failure").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert_eq!(SERVICE_VERSION, "Dogshouseservice.Version1.0.1");
    }

    #[test]
    fn test_routes_build() {
        let _router = dog_routes(Arc::new(DogState::new()));
    }
}
