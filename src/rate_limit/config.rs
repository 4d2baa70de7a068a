//! Rate limiter configuration
//!
//! Fixed-window parameters: permits per window and window duration. The
//! queue limit is fixed at zero and not configurable: a request over the
//! limit is rejected immediately, never buffered.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_permit_limit() -> u32 {
    10
}

fn default_window_secs() -> u64 {
    10
}

/// Fixed-window limiter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedWindowConfig {
    /// Requests admitted per window (default: 10)
    #[serde(default = "default_permit_limit")]
    pub permit_limit: u32,

    /// Window duration in seconds (default: 10)
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for FixedWindowConfig {
    fn default() -> Self {
        Self {
            permit_limit: default_permit_limit(),
            window_secs: default_window_secs(),
        }
    }
}

impl FixedWindowConfig {
    /// Window duration as a `Duration`
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FixedWindowConfig::default();
        assert_eq!(config.permit_limit, 10);
        assert_eq!(config.window(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: FixedWindowConfig = serde_json::from_str(r#"{"permit_limit":3}"#).unwrap();
        assert_eq!(config.permit_limit, 3);
        assert_eq!(config.window_secs, 10);
    }
}
