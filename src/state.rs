//! Application state shared across all request handlers.

use crate::{
    config::AppConfig,
    error::StartupError,
    services::{LoginGuard, SimpleRateLimiter, TokenService, auth::TokenError, database},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared resources, built once at startup and cloned into every worker.
///
/// Every field is cheap to clone and clones share the same underlying
/// pool, counters and configuration.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
    pub limiter: SimpleRateLimiter,
    pub login_guard: LoginGuard,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Result<Self, TokenError> {
        Ok(Self {
            db,
            tokens: TokenService::new(&config.auth)?,
            limiter: SimpleRateLimiter::new(config.rate_limit.clone()),
            login_guard: LoginGuard::new(&config.login_guard),
            config: Arc::new(config),
        })
    }

    /// Connect to the database, create missing tables and make sure the
    /// configured admin account exists.
    pub async fn init(config: AppConfig) -> Result<Self, StartupError> {
        let db = database::connect(&config.database).await?;
        database::ensure_schema(&db).await?;
        database::bootstrap_admin(&db, &config.auth).await?;

        Self::new(db, config).map_err(|e| StartupError::Config(e.to_string()))
    }
}
