//! Authentication endpoint handlers: signup, login and logout.

use crate::{
    entities::{prelude::User, user},
    error::ApiError,
    middleware::{Guest, RequestId, Session},
    models::{
        LoginRequest, LoginResponse, MessageResponse, Role, SignupRequest, SignupResponse,
        audit::{AuthAuditEvent, AuthEventType},
        to_column,
        user::UserView,
    },
    services::{database::local_part, hash_password, validation, verify_password},
    state::AppState,
    utils::http::{TOKEN_COOKIE, extract_client_ip, extract_user_agent, throttle_key},
};
use actix_web::{
    HttpRequest, HttpResponse,
    cookie::{Cookie, SameSite, time::Duration},
    web::block,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

fn audit(req: &HttpRequest, event_type: AuthEventType) -> AuthAuditEvent {
    AuthAuditEvent::new(
        event_type,
        extract_client_ip(req),
        req.method().as_str(),
        req.path(),
    )
    .with_user_agent(extract_user_agent(req))
    .with_request_id(RequestId::of(req))
}

fn internal(e: impl std::fmt::Display) -> ApiError {
    ApiError::Internal(e.to_string())
}

/// Account creation
///
/// New accounts always get the `user` role. Callers that are already logged
/// in are turned away.
#[api_v2_operation(
    summary = "Sign up",
    description = "Create a user account",
    tags("Authentication")
)]
pub async fn signup(
    req: HttpRequest,
    _guest: Guest,
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<CreatedJson<SignupResponse>, ApiError> {
    let SignupRequest {
        email,
        password,
        name,
    } = payload.into_inner();

    let checked = validation::email(&email).and_then(|email| {
        validation::password(&password)?;
        Ok(email)
    });
    let email = match checked {
        Ok(email) => email,
        Err(e) => {
            audit(&req, AuthEventType::SignupFailure)
                .with_context(e.to_string())
                .log();
            return Err(e);
        }
    };

    let existing = User::find()
        .filter(user::Column::Email.eq(email.clone()))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        audit(&req, AuthEventType::SignupFailure)
            .with_context("email already registered")
            .log();
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let name = match name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => local_part(&email).to_string(),
    };
    let hash = block(move || hash_password(&password))
        .await
        .map_err(internal)?
        .map_err(internal)?;

    let created = user::ActiveModel {
        name: ActiveValue::Set(name),
        email: ActiveValue::Set(email),
        password: ActiveValue::Set(hash),
        role: ActiveValue::Set(to_column(&Role::User)),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|err| match ApiError::from(err) {
        // a concurrent signup won the race for this email
        ApiError::Conflict(_) => ApiError::Conflict("User already exists".to_string()),
        other => other,
    })?;

    audit(&req, AuthEventType::SignupSuccess)
        .with_user_id(Some(created.id))
        .log();

    Ok(CreatedJson(SignupResponse {
        message: "Signup successful".to_string(),
        user: created.into(),
    }))
}

/// User login
///
/// Checks the credentials, returns an access token and stores it in the
/// `token` cookie. Repeated failures from one address are throttled.
#[api_v2_operation(
    summary = "User Login",
    description = "Authenticate user and return access token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 429, description = "Too many failed attempts")
    )
)]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let ip_address = throttle_key(&req, state.config.server.trust_proxy);

    if state.login_guard.is_suspicious(&ip_address) {
        audit(&req, AuthEventType::SuspiciousActivity)
            .with_context("login blocked after repeated failures")
            .log();
        return Err(ApiError::TooManyRequests);
    }

    let LoginRequest { email, password } = payload.into_inner();
    let email = email.trim().to_lowercase();
    let found = User::find()
        .filter(user::Column::Email.eq(email))
        .one(&state.db)
        .await?;

    let verified = match found {
        Some(user) => {
            let stored = user.password.clone();
            let matches = block(move || verify_password(&password, &stored))
                .await
                .map_err(internal)?;
            matches.then_some(user)
        }
        None => None,
    };

    let Some(user) = verified else {
        let suspicious = state.login_guard.record_failure(&ip_address);
        audit(&req, AuthEventType::LoginFailure)
            .with_context("invalid credentials")
            .log();
        if suspicious {
            audit(&req, AuthEventType::SuspiciousActivity)
                .with_context("failed login threshold reached")
                .log();
        }
        return Err(ApiError::Unauthorized("Invalid email or password.".to_string()));
    };

    state.login_guard.clear(&ip_address);
    let token = state.tokens.issue(&user).map_err(internal)?;
    let cookie = Cookie::build(TOKEN_COOKIE, token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.auth.cookie_secure)
        .max_age(Duration::seconds(state.tokens.lifetime_seconds()))
        .finish();

    audit(&req, AuthEventType::LoginSuccess)
        .with_user_id(Some(user.id))
        .log();

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserView::from(user),
    }))
}

/// Logout
///
/// Tokens are stateless; logging out only expires the cookie.
#[api_v2_operation(summary = "Logout", tags("Authentication"))]
pub async fn logout(req: HttpRequest) -> HttpResponse {
    let user_id = Session::of(&req).claims().map(|claims| claims.sub);
    audit(&req, AuthEventType::Logout).with_user_id(user_id).log();

    let mut cookie = Cookie::build(TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();
    HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("Logged out"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/auth")
            .route(web::post().to(signup))
            .route(web::delete().to(logout)),
    )
    .service(web::resource("/login").route(web::post().to(login)));
}
