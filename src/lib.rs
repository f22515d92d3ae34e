//! Research Projects API - research projects, people and funding, plus a
//! company / drone inventory module, served over actix-web.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `entities/` - sea-orm table definitions
//! - `models/` - request/response models and audit events
//! - `handlers/` - one module per controller, plus the app factory
//! - `routes` - controller registry and microservice filtering
//! - `middleware/` - request ids, security headers, rate limiting,
//!   authentication, role guards and body sanitization
//! - `services/` - tokens and passwords, rate limiting, validation,
//!   database bootstrap and link lookups
//! - `config/` - configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use research_projects_api::{AppConfig, AppState, create_app};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env();
//!     let bind = config.server.bind_address.clone();
//!     let state = AppState::init(config).await?;
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind(bind)?
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use config::{AppConfig, RoutingConfig};
pub use error::{ApiError, StartupError};
pub use handlers::{create_app, create_openapi_spec};
pub use models::{AuthAuditEvent, AuthEventOutcome, AuthEventType, Role};
pub use services::{Claims, SimpleRateLimiter, TokenService, hash_password, verify_password};
pub use state::AppState;
pub use utils::{extract_client_ip, extract_user_agent};
