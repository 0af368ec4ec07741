//! Client-side request throttling
//!
//! Token bucket built on the governor crate. Disabled unless configured.

use crate::error::{Error, Result};
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Configuration for request throttling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Requests allowed back to back before throttling kicks in
    #[serde(default = "default_burst")]
    pub burst_size: u32,
}

fn default_burst() -> u32 {
    1
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }
}

/// Token bucket rate limiter shared by all requests of one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    config: RateLimiterConfig,
}

impl RateLimiter {
    /// Create a limiter; both rates must be non-zero
    pub fn new(config: &RateLimiterConfig) -> Result<Self> {
        let rate = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            Error::invalid_value("requests_per_second", "must be greater than zero")
        })?;
        let burst = NonZeroU32::new(config.burst_size)
            .ok_or_else(|| Error::invalid_value("burst_size", "must be greater than zero"))?;

        Ok(Self {
            limiter: Arc::new(Governor::direct(Quota::per_second(rate).allow_burst(burst))),
            config: *config,
        })
    }

    /// Wait until a request may be sent
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Take a permit if one is available right now
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// The configuration this limiter was built from
    pub fn config(&self) -> &RateLimiterConfig {
        &self.config
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod rate_limit_tests {
    use super::*;

    #[test]
    fn test_rate_limiter_rejects_zero() {
        assert!(RateLimiter::new(&RateLimiterConfig::new(0, 5)).is_err());
        assert!(RateLimiter::new(&RateLimiterConfig::new(5, 0)).is_err());
    }

    #[test]
    fn test_rate_limiter_config_serde_default_burst() {
        let config: RateLimiterConfig = serde_yaml::from_str("requests_per_second: 20").unwrap();
        assert_eq!(config, RateLimiterConfig::new(20, 1));
    }

    #[tokio::test]
    async fn test_rate_limiter_allows_burst_then_throttles() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(1, 3)).unwrap();

        for _ in 0..3 {
            assert!(limiter.try_acquire());
        }
        assert!(!limiter.try_acquire());
    }

    #[tokio::test]
    async fn test_rate_limiter_wait() {
        let limiter = RateLimiter::new(&RateLimiterConfig::new(100, 10)).unwrap();

        // Within the burst, so this resolves immediately
        limiter.wait().await;
        assert_eq!(limiter.config().burst_size, 10);
    }
}
