//! Failed login tracking per client address.

use crate::config::LoginGuardConfig;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

/// Tracks failed logins by IP address
///
/// Once an address reaches `max_failures` inside the window it is reported
/// as suspicious until the window that started with its first failure ends.
#[derive(Clone)]
pub struct LoginGuard {
    failed_attempts: Arc<Mutex<HashMap<String, (usize, Instant)>>>,
    max_failures: usize,
    window: Duration,
}

impl LoginGuard {
    pub fn new(config: &LoginGuardConfig) -> Self {
        Self {
            failed_attempts: Arc::new(Mutex::new(HashMap::new())),
            max_failures: config.max_failures,
            window: Duration::from_secs(config.window_seconds),
        }
    }

    fn attempts(&self) -> MutexGuard<'_, HashMap<String, (usize, Instant)>> {
        self.failed_attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a failed login; returns `true` once the threshold is reached.
    pub fn record_failure(&self, ip: &str) -> bool {
        let now = Instant::now();
        let window = self.window;
        let mut attempts = self.attempts();

        attempts.retain(|_, (_, started)| now.duration_since(*started) < window);

        let (count, _) = attempts.entry(ip.to_string()).or_insert((0, now));
        *count += 1;
        *count >= self.max_failures
    }

    pub fn is_suspicious(&self, ip: &str) -> bool {
        let attempts = self.attempts();
        match attempts.get(ip) {
            Some((count, started)) => {
                started.elapsed() < self.window && *count >= self.max_failures
            }
            None => false,
        }
    }

    /// Forget the failures of `ip` after a successful login
    pub fn clear(&self, ip: &str) {
        self.attempts().remove(ip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> LoginGuard {
        LoginGuard::new(&LoginGuardConfig {
            max_failures: 3,
            window_seconds: 300,
        })
    }

    #[test]
    fn test_threshold() {
        let guard = guard();
        assert!(!guard.record_failure("1.2.3.4"));
        assert!(!guard.record_failure("1.2.3.4"));
        assert!(!guard.is_suspicious("1.2.3.4"));
        assert!(guard.record_failure("1.2.3.4"));
        assert!(guard.is_suspicious("1.2.3.4"));
        assert!(!guard.is_suspicious("5.6.7.8"));
    }

    #[test]
    fn test_clear_resets_counter() {
        let guard = guard();
        for _ in 0..3 {
            guard.record_failure("1.2.3.4");
        }
        guard.clear("1.2.3.4");
        assert!(!guard.is_suspicious("1.2.3.4"));
    }

    #[test]
    fn test_zero_window_never_flags() {
        let guard = LoginGuard::new(&LoginGuardConfig {
            max_failures: 1,
            window_seconds: 0,
        });
        guard.record_failure("1.2.3.4");
        assert!(!guard.is_suspicious("1.2.3.4"));
    }
}
