//! Authentication configuration.

use std::env;

const DEV_SECRET: &str = "development-only-jwt-secret-change-me";

/// Settings for access tokens and the session cookie
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_lifetime_seconds: i64,
    pub cookie_secure: bool,
    /// Credentials for the administrator created at startup when none exists
    pub bootstrap_admin: Option<AdminBootstrap>,
}

#[derive(Clone, Debug)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_SECRET.to_string(),
            token_lifetime_seconds: 8 * 60 * 60,
            cookie_secure: false,
            bootstrap_admin: None,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("JWT_SECRET is not set, using the development secret");
                DEV_SECRET.to_string()
            });

        let token_lifetime_seconds = super::env_parse::<i64>("JWT_LIFETIME")
            .filter(|v| *v > 0)
            .unwrap_or(8 * 60 * 60);

        let bootstrap_admin = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
            (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminBootstrap { email, password })
            }
            _ => None,
        };

        Self {
            jwt_secret,
            token_lifetime_seconds,
            cookie_secure: super::env_flag("AUTH_COOKIE_SECURE", false),
            bootstrap_admin,
        }
    }
}
