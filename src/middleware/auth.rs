//! Authentication middleware.
//!
//! Resolves the caller's access token once per request and stores the
//! outcome as a [`Session`] in the request extensions. It never rejects a
//! request; the extractors in [`crate::middleware::guards`] decide.

use crate::{
    services::{Claims, TokenService},
    utils::http::extract_access_token,
};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::future::{Ready, ready};

/// Who is calling
#[derive(Clone, Debug)]
pub enum Session {
    /// A valid, unexpired token
    Authenticated(Claims),
    /// No token was sent
    Anonymous,
    /// A token was sent but failed verification or expired
    Invalid,
}

impl Session {
    /// The session attached by [`Authenticate`]; `Anonymous` when absent
    pub fn of(req: &HttpRequest) -> Session {
        req.extensions()
            .get::<Session>()
            .cloned()
            .unwrap_or(Session::Anonymous)
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Session::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Authentication middleware factory
pub struct Authenticate {
    tokens: TokenService,
}

impl Authenticate {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authenticate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateMiddleware {
            service,
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct AuthenticateMiddleware<S> {
    service: S,
    tokens: TokenService,
}

impl<S, B> Service<ServiceRequest> for AuthenticateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = match extract_access_token(req.request()) {
            None => Session::Anonymous,
            Some(token) => match self.tokens.verify(&token) {
                Ok(claims) => Session::Authenticated(claims),
                Err(e) => {
                    tracing::debug!(error = %e, path = %req.path(), "rejected access token");
                    Session::Invalid
                }
            },
        };
        req.extensions_mut().insert(session);
        self.service.call(req)
    }
}
