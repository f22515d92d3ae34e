//! Rate limiting and login throttling configuration.

/// Configuration for the per-client request limiter
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // 100 requests per 15 minutes
        Self {
            max_requests: 100,
            window_seconds: 15 * 60,
        }
    }
}

impl RateLimitConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_requests: super::env_parse("RATE_LIMIT_MAX").unwrap_or(defaults.max_requests),
            window_seconds: super::env_parse("RATE_LIMIT_WINDOW")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.window_seconds),
        }
    }
}

/// Configuration for tracking failed logins per client
#[derive(Clone, Debug)]
pub struct LoginGuardConfig {
    pub max_failures: usize,
    pub window_seconds: u64,
}

impl Default for LoginGuardConfig {
    fn default() -> Self {
        Self {
            max_failures: 5,
            window_seconds: 300,
        }
    }
}

impl LoginGuardConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_failures: super::env_parse("AUTH_MAX_FAILURES").unwrap_or(defaults.max_failures),
            window_seconds: super::env_parse("AUTH_FAILURE_WINDOW")
                .unwrap_or(defaults.window_seconds),
        }
    }
}
