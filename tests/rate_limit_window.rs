//! Rate Limit Window Tests
//!
//! The fixed-window limiter in front of the API: exactly `permit_limit`
//! requests per window succeed, the next is rejected with 429, and every
//! operation shares the one global bucket.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use dogshouse::http_server::{HttpServer, HttpServerConfig};
use dogshouse::rate_limit::{Decision, FixedWindowConfig, FixedWindowLimiter, GLOBAL_BUCKET};
use dogshouse::store::MemoryDogStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn limited_router(permit_limit: u32) -> Router {
    let config = HttpServerConfig {
        rate_limit: FixedWindowConfig {
            permit_limit,
            window_secs: 10,
        },
        ..Default::default()
    };
    HttpServer::with_store(config, Arc::new(MemoryDogStore::new())).router()
}

async fn status_of(router: &Router, uri: &str) -> StatusCode {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

// =============================================================================
// HTTP-level Admission
// =============================================================================

/// Within one window the 1st-10th requests succeed and the 11th gets 429.
#[tokio::test]
async fn test_eleventh_request_in_window_is_rejected() {
    let router = limited_router(10);

    for _ in 0..10 {
        assert_eq!(status_of(&router, "/dogs").await, StatusCode::OK);
    }
    assert_eq!(
        status_of(&router, "/dogs").await,
        StatusCode::TOO_MANY_REQUESTS
    );
}

/// Rate-limited responses carry only the status code.
#[tokio::test]
async fn test_rejection_has_empty_body() {
    use http_body_util::BodyExt;

    let router = limited_router(1);
    assert_eq!(status_of(&router, "/ping").await, StatusCode::OK);

    let response = router
        .clone()
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

/// All three operations drain the same global bucket.
#[tokio::test]
async fn test_all_operations_share_one_bucket() {
    let router = limited_router(2);

    assert_eq!(status_of(&router, "/ping").await, StatusCode::OK);
    assert_eq!(status_of(&router, "/dogs").await, StatusCode::OK);
    assert_eq!(
        status_of(&router, "/ping").await,
        StatusCode::TOO_MANY_REQUESTS
    );
}

// =============================================================================
// Window Arithmetic (limiter driven directly with synthetic clocks)
// =============================================================================

#[test]
fn test_counter_resets_after_window_elapses() {
    let limiter = FixedWindowLimiter::new(FixedWindowConfig {
        permit_limit: 2,
        window_secs: 10,
    });
    let start = Instant::now();

    assert_eq!(limiter.admit(GLOBAL_BUCKET, start), Decision::Admitted);
    assert_eq!(limiter.admit(GLOBAL_BUCKET, start), Decision::Admitted);
    assert_eq!(limiter.admit(GLOBAL_BUCKET, start), Decision::Rejected);

    let next_window = start + Duration::from_secs(10);
    assert_eq!(limiter.admit(GLOBAL_BUCKET, next_window), Decision::Admitted);
}

#[test]
fn test_rejections_inside_window_do_not_extend_it() {
    let limiter = FixedWindowLimiter::new(FixedWindowConfig {
        permit_limit: 1,
        window_secs: 10,
    });
    let start = Instant::now();

    assert_eq!(limiter.admit(GLOBAL_BUCKET, start), Decision::Admitted);

    // A stream of rejected requests must not push back the reset point.
    for secs in 1..10 {
        let t = start + Duration::from_secs(secs);
        assert_eq!(limiter.admit(GLOBAL_BUCKET, t), Decision::Rejected);
    }

    let boundary = start + Duration::from_secs(10);
    assert_eq!(limiter.admit(GLOBAL_BUCKET, boundary), Decision::Admitted);
}
