//! Shared setup for the integration suites.
#![allow(dead_code)]

use actix_web::http::header;
use research_projects_api::{
    AppConfig, AppState, Role,
    config::{DatabaseConfig, RateLimitConfig, RoutingConfig},
    entities::user,
    hash_password,
};
use sea_orm::{ActiveModelTrait, ActiveValue};

pub const PASSWORD: &str = "password123";

/// In-memory database, generous rate limit, both microservices
pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig::in_memory(),
        rate_limit: RateLimitConfig {
            max_requests: 10_000,
            window_seconds: 60,
        },
        ..AppConfig::default()
    }
}

pub fn config_for_services(ids: &str) -> AppConfig {
    AppConfig {
        routing: RoutingConfig::from_list(ids),
        ..test_config()
    }
}

pub async fn state_with(config: AppConfig) -> AppState {
    AppState::init(config)
        .await
        .expect("Failed to initialize test state")
}

pub async fn test_state() -> AppState {
    state_with(test_config()).await
}

/// Insert a user directly, bypassing signup so any role can be created
pub async fn create_user(
    state: &AppState,
    email: &str,
    role: Role,
    company_id: Option<i32>,
) -> user::Model {
    user::ActiveModel {
        name: ActiveValue::Set(email.split('@').next().unwrap_or(email).to_string()),
        email: ActiveValue::Set(email.to_string()),
        password: ActiveValue::Set(hash_password(PASSWORD).expect("Failed to hash password")),
        role: ActiveValue::Set(role.as_str().to_string()),
        company_id: ActiveValue::Set(company_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to insert user")
}

/// `Authorization: Bearer ...` header for `user`
pub fn bearer(state: &AppState, user: &user::Model) -> (header::HeaderName, String) {
    let token = state.tokens.issue(user).expect("Failed to issue token");
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

pub async fn read_json<B: actix_web::body::MessageBody>(
    resp: actix_web::dev::ServiceResponse<B>,
) -> serde_json::Value {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).expect("Failed to parse response as JSON")
}
