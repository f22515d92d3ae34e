//! Aggregated application configuration.

use super::{
    AuthConfig, CorsConfig, DatabaseConfig, LoginGuardConfig, RateLimitConfig, RoutingConfig,
    SecurityHeadersConfig, ServerConfig,
};

/// Everything the server needs to start, loaded once at boot
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub login_guard: LoginGuardConfig,
    pub security: SecurityHeadersConfig,
    pub cors: CorsConfig,
    pub routing: RoutingConfig,
    /// Add the underlying error detail to error responses
    pub log_real_errors: bool,
    /// Maximum accepted request body, in bytes
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            rate_limit: RateLimitConfig::default(),
            login_guard: LoginGuardConfig::default(),
            security: SecurityHeadersConfig::default(),
            cors: CorsConfig::default(),
            routing: RoutingConfig::default(),
            log_real_errors: false,
            body_limit: 50 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load every section from the environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            login_guard: LoginGuardConfig::from_env(),
            security: SecurityHeadersConfig::from_env(),
            cors: CorsConfig::from_env(),
            routing: RoutingConfig::from_env(),
            log_real_errors: super::env_flag("LOG_REAL_ERRORS", false),
            body_limit: super::env_parse("BODY_LIMIT").unwrap_or(50 * 1024 * 1024),
        }
    }
}
