//! Security headers and CORS configuration.

use std::env;

/// Configuration for security headers middleware
#[derive(Clone, Debug)]
pub struct SecurityHeadersConfig {
    pub csp_enabled: bool,
    pub csp_directives: String,
    pub hsts_enabled: bool,
    pub hsts_max_age: u32,
    pub frame_options: String,
    pub referrer_policy: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp_enabled: true,
            csp_directives: "default-src 'self'; frame-ancestors 'none'; object-src 'none'"
                .to_string(),
            hsts_enabled: true,
            hsts_max_age: 15_552_000, // 180 days
            frame_options: "SAMEORIGIN".to_string(),
            referrer_policy: "no-referrer".to_string(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            csp_enabled: super::env_flag("SECURITY_CSP_ENABLED", defaults.csp_enabled),
            csp_directives: env::var("CSP_DIRECTIVES").unwrap_or(defaults.csp_directives),
            hsts_enabled: super::env_flag("HSTS_ENABLED", defaults.hsts_enabled),
            hsts_max_age: super::env_parse("HSTS_MAX_AGE").unwrap_or(defaults.hsts_max_age),
            frame_options: env::var("X_FRAME_OPTIONS").unwrap_or(defaults.frame_options),
            referrer_policy: env::var("REFERRER_POLICY").unwrap_or(defaults.referrer_policy),
        }
    }
}

/// Origins allowed to call the API with credentials
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://front:3000".to_string(),
                "http://front-service:3000".to_string(),
            ],
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        match env::var("CORS_ORIGINS") {
            Ok(raw) => Self {
                allowed_origins: super::split_list(&raw),
            },
            Err(_) => Self::default(),
        }
    }
}
