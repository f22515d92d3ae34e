//! Business services: tokens and passwords, throttling, sanitization and
//! database helpers.

pub mod auth;
pub mod database;
pub mod login_guard;
pub mod lookup;
pub mod rate_limit;
pub mod sanitize;
pub mod validation;

pub use auth::{Claims, TokenService, hash_password, verify_password};
pub use login_guard::LoginGuard;
pub use rate_limit::{RateLimitDecision, SimpleRateLimiter};
