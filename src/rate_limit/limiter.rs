//! Fixed-window admission control
//!
//! Per-bucket counter and window-start instant behind a single mutex. The
//! mutex is only held for the map lookup and counter update, so contention
//! stays bounded on the hot path.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use super::config::FixedWindowConfig;

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request may proceed to its handler
    Admitted,
    /// Window exhausted; caller must be told immediately (no queuing)
    Rejected,
}

/// Mutable window state for one bucket, created lazily on first admit
#[derive(Debug)]
struct WindowState {
    window_start: Instant,
    count: u32,
}

/// Fixed-window rate limiter over named buckets.
///
/// Lives for the process lifetime; window state is never persisted across
/// restarts. All admission goes through [`FixedWindowLimiter::admit`] under
/// the internal lock, so concurrent calls cannot lose increments or admit
/// past the limit.
pub struct FixedWindowLimiter {
    config: FixedWindowConfig,
    buckets: Mutex<HashMap<String, WindowState>>,
}

impl FixedWindowLimiter {
    /// Create a limiter with the given window parameters
    pub fn new(config: FixedWindowConfig) -> Self {
        Self {
            config,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or reject a request against `bucket` as of `now`.
    ///
    /// The window reset happens before the admit check: a request arriving
    /// exactly `window` after the window started belongs to the new window.
    pub fn admit(&self, bucket: &str, now: Instant) -> Decision {
        let mut buckets = self
            .buckets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let state = buckets
            .entry(bucket.to_string())
            .or_insert_with(|| WindowState {
                window_start: now,
                count: 0,
            });

        if now.duration_since(state.window_start) >= self.config.window() {
            state.window_start = now;
            state.count = 0;
        }

        if state.count < self.config.permit_limit {
            state.count += 1;
            Decision::Admitted
        } else {
            Decision::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn limiter(permit_limit: u32, window_secs: u64) -> FixedWindowLimiter {
        FixedWindowLimiter::new(FixedWindowConfig {
            permit_limit,
            window_secs,
        })
    }

    #[test]
    fn test_admits_up_to_permit_limit() {
        let limiter = limiter(10, 10);
        let now = Instant::now();

        for _ in 0..10 {
            assert_eq!(limiter.admit("fixed", now), Decision::Admitted);
        }
        assert_eq!(limiter.admit("fixed", now), Decision::Rejected);
    }

    #[test]
    fn test_rejections_do_not_consume_permits() {
        let limiter = limiter(2, 10);
        let now = Instant::now();

        assert_eq!(limiter.admit("fixed", now), Decision::Admitted);
        assert_eq!(limiter.admit("fixed", now), Decision::Admitted);
        assert_eq!(limiter.admit("fixed", now), Decision::Rejected);
        assert_eq!(limiter.admit("fixed", now), Decision::Rejected);

        // Next window admits a full quota again.
        let later = now + Duration::from_secs(10);
        assert_eq!(limiter.admit("fixed", later), Decision::Admitted);
        assert_eq!(limiter.admit("fixed", later), Decision::Admitted);
        assert_eq!(limiter.admit("fixed", later), Decision::Rejected);
    }

    /// Reset happens before the admit check, so the boundary instant belongs
    /// to the new window.
    #[test]
    fn test_window_boundary_belongs_to_new_window() {
        let limiter = limiter(1, 10);
        let now = Instant::now();

        assert_eq!(limiter.admit("fixed", now), Decision::Admitted);
        assert_eq!(limiter.admit("fixed", now), Decision::Rejected);

        let boundary = now + Duration::from_secs(10);
        assert_eq!(limiter.admit("fixed", boundary), Decision::Admitted);
    }

    #[test]
    fn test_within_window_state_persists() {
        let limiter = limiter(1, 10);
        let now = Instant::now();

        assert_eq!(limiter.admit("fixed", now), Decision::Admitted);
        let almost = now + Duration::from_secs(9);
        assert_eq!(limiter.admit("fixed", almost), Decision::Rejected);
    }

    #[test]
    fn test_buckets_are_independent() {
        let limiter = limiter(1, 10);
        let now = Instant::now();

        assert_eq!(limiter.admit("fixed", now), Decision::Admitted);
        assert_eq!(limiter.admit("other", now), Decision::Admitted);
        assert_eq!(limiter.admit("fixed", now), Decision::Rejected);
    }

    #[test]
    fn test_concurrent_admissions_never_exceed_limit() {
        use std::sync::Arc;

        let limiter = Arc::new(limiter(10, 10));
        let now = Instant::now();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    (0..25)
                        .filter(|_| limiter.admit("fixed", now) == Decision::Admitted)
                        .count()
                })
            })
            .collect();

        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(admitted, 10);
    }
}
