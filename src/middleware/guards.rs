//! Role gates expressed as request extractors.
//!
//! A handler states who may call it through its arguments:
//!
//! * `Authorized<R>`: an authenticated caller whose role is in `R`,
//! * `Guest`: a caller that is not logged in.
//!
//! Handlers with neither are public.

use super::{auth::Session, request_id::RequestId};
use crate::{
    error::ApiError,
    models::{
        Role,
        audit::{AuthAuditEvent, AuthEventType},
    },
    services::Claims,
    utils::http::{extract_client_ip, extract_user_agent},
};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use paperclip::{actix::OperationModifier, v2::schema::Apiv2Schema};
use std::{
    future::{Ready, ready},
    marker::PhantomData,
    ops::Deref,
};

/// A set of roles allowed through a gate
pub trait RoleSet {
    const ROLES: &'static [Role];
}

/// `admin`
pub struct Admins;
/// `admin`, `project_creator`
pub struct Creators;
/// Any role
pub struct Members;
/// Only plain `user` accounts
pub struct PlainUsers;

impl RoleSet for Admins {
    const ROLES: &'static [Role] = &[Role::Admin];
}

impl RoleSet for Creators {
    const ROLES: &'static [Role] = &[Role::Admin, Role::ProjectCreator];
}

impl RoleSet for Members {
    const ROLES: &'static [Role] = &[Role::Admin, Role::ProjectCreator, Role::User];
}

impl RoleSet for PlainUsers {
    const ROLES: &'static [Role] = &[Role::User];
}

fn deny(req: &HttpRequest, user_id: Option<i32>, reason: &str) {
    AuthAuditEvent::new(
        AuthEventType::AccessDenied,
        extract_client_ip(req),
        req.method().as_str(),
        req.path(),
    )
    .with_user_agent(extract_user_agent(req))
    .with_user_id(user_id)
    .with_request_id(RequestId::of(req))
    .with_context(reason)
    .log();
}

/// Check the request's session against `roles`
pub fn authorize(req: &HttpRequest, roles: &[Role]) -> Result<Claims, ApiError> {
    match Session::of(req) {
        Session::Authenticated(claims) if roles.contains(&claims.role) => Ok(claims),
        Session::Authenticated(claims) => {
            deny(req, Some(claims.sub), "role not allowed");
            Err(ApiError::forbidden())
        }
        Session::Anonymous => {
            deny(req, None, "no token");
            Err(ApiError::Unauthorized(
                "You need to be logged in to access this resource.".to_string(),
            ))
        }
        Session::Invalid => {
            deny(req, None, "invalid or expired token");
            Err(ApiError::Unauthorized("Invalid or expired token.".to_string()))
        }
    }
}

/// An authenticated caller whose role belongs to `R`
pub struct Authorized<R> {
    pub claims: Claims,
    _roles: PhantomData<R>,
}

impl<R> Authorized<R> {
    pub fn user_id(&self) -> i32 {
        self.claims.sub
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role == Role::Admin
    }

    /// Admins may act on anyone; everybody else only on themselves
    pub fn is_self_or_admin(&self, user_id: i32) -> bool {
        self.is_admin() || self.claims.sub == user_id
    }
}

impl<R> Deref for Authorized<R> {
    type Target = Claims;

    fn deref(&self) -> &Claims {
        &self.claims
    }
}

impl<R: RoleSet> FromRequest for Authorized<R> {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authorize(req, R::ROLES).map(|claims| Authorized {
            claims,
            _roles: PhantomData,
        }))
    }
}

impl<R> Apiv2Schema for Authorized<R> {}
impl<R> OperationModifier for Authorized<R> {}

/// A caller that sent no token at all; any token, valid or not, gets 401
pub struct Guest;

impl FromRequest for Guest {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match Session::of(req) {
            Session::Authenticated(claims) => {
                deny(req, Some(claims.sub), "already authenticated");
                Err(ApiError::Unauthorized(
                    "You are already logged in.".to_string(),
                ))
            }
            Session::Invalid => {
                deny(req, None, "token sent to a guest-only route");
                Err(ApiError::Unauthorized("Invalid or expired token.".to_string()))
            }
            Session::Anonymous => Ok(Guest),
        })
    }
}

impl Apiv2Schema for Guest {}
impl OperationModifier for Guest {}
