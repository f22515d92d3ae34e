//! Request pipeline middleware and role-gating extractors.
//!
//! From the outside in: request id, CORS, security headers, rate limiting,
//! authentication, body sanitization.

pub mod auth;
pub mod guards;
pub mod rate_limit;
pub mod request_id;
pub mod sanitize;
pub mod security;

pub use auth::{Authenticate, Session};
pub use guards::{Admins, Authorized, Creators, Guest, Members, PlainUsers, RoleSet};
pub use rate_limit::RateLimit;
pub use request_id::{RequestId, RequestIdMiddleware};
pub use sanitize::Sanitize;
pub use security::SecurityHeaders;
