//! Rate-limit middleware
//!
//! Every request consults the fixed-window limiter before its handler runs;
//! rejected requests short-circuit with 429 and no body.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::rate_limit::{Decision, FixedWindowLimiter, GLOBAL_BUCKET};

/// Admission check applied ahead of every handler
pub async fn rate_limit(
    State(limiter): State<Arc<FixedWindowLimiter>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match limiter.admit(GLOBAL_BUCKET, Instant::now()) {
        Decision::Admitted => Ok(next.run(request).await),
        Decision::Rejected => {
            tracing::debug!(
                method = %request.method(),
                path = %request.uri().path(),
                "request rejected by rate limiter"
            );
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}
