//! Fixed-window request limiter keyed by client address.

use crate::config::RateLimitConfig;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

/// Result of counting one request against a client's window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: usize,
    pub remaining: usize,
    /// Seconds until the current window closes
    pub reset_after: u64,
}

/// Simple in-memory rate limiter
///
/// Each key gets `max_requests` requests per window; the window starts with
/// the key's first request. Clones share the same counters.
#[derive(Clone)]
pub struct SimpleRateLimiter {
    config: RateLimitConfig,
    storage: Arc<Mutex<HashMap<String, (usize, Instant)>>>,
}

impl SimpleRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_seconds)
    }

    /// Count a request for `key` (typically the client IP)
    pub fn check(&self, key: &str) -> RateLimitDecision {
        let window = self.window();
        let limit = self.config.max_requests;
        let now = Instant::now();
        let mut storage = self
            .storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Clean up expired entries
        storage.retain(|_, (_, started)| now.duration_since(*started) < window);

        let (count, started) = storage.entry(key.to_string()).or_insert((0, now));
        let allowed = *count < limit;
        if allowed {
            *count += 1;
        }

        let elapsed = now.duration_since(*started);
        RateLimitDecision {
            allowed,
            limit,
            remaining: limit.saturating_sub(*count),
            reset_after: window.saturating_sub(elapsed).as_secs().max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: usize) -> SimpleRateLimiter {
        SimpleRateLimiter::new(RateLimitConfig {
            max_requests,
            window_seconds: 60,
        })
    }

    #[test]
    fn test_blocks_after_limit() {
        let limiter = limiter(2);
        let first = limiter.check("10.0.0.1");
        assert!(first.allowed);
        assert_eq!(first.remaining, 1);
        assert!(limiter.check("10.0.0.1").allowed);

        let third = limiter.check("10.0.0.1");
        assert!(!third.allowed);
        assert_eq!(third.remaining, 0);
        assert!(third.reset_after <= 60);
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = limiter(1);
        assert!(limiter.check("a").allowed);
        assert!(!limiter.check("a").allowed);
        assert!(limiter.check("b").allowed);
    }

    #[test]
    fn test_clones_share_counters() {
        let limiter = limiter(1);
        let clone = limiter.clone();
        assert!(limiter.check("a").allowed);
        assert!(!clone.check("a").allowed);
    }
}
