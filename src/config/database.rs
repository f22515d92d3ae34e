//! Database connection configuration.

use sea_orm::ConnectOptions;
use std::{env, time::Duration};

/// Connection pool settings for the relational store
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://research.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 0,
            idle_timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            url: env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: super::env_parse("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.max_connections),
            min_connections: super::env_parse("DB_MIN_CONNECTIONS")
                .unwrap_or(defaults.min_connections),
            idle_timeout_seconds: super::env_parse("DB_IDLE_TIMEOUT")
                .unwrap_or(defaults.idle_timeout_seconds),
        }
    }

    /// A private in-memory SQLite database.
    ///
    /// Each SQLite memory connection is its own database, so the pool is
    /// pinned to exactly one long-lived connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout_seconds: 0,
        }
    }

    /// Build sea-orm connect options from this configuration
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .sqlx_logging(false);
        if self.idle_timeout_seconds > 0 {
            options.idle_timeout(Duration::from_secs(self.idle_timeout_seconds));
        }
        options
    }
}
