//! Per-client rate limiting middleware.

use crate::{
    error::ApiError,
    models::audit::{AuthAuditEvent, AuthEventType},
    services::{RateLimitDecision, SimpleRateLimiter},
    utils::http::{extract_user_agent, throttle_key},
};
use actix_web::{
    Error, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderMap, HeaderName, HeaderValue},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// Rate limiting middleware factory
pub struct RateLimit {
    limiter: SimpleRateLimiter,
    trust_proxy: bool,
}

impl RateLimit {
    pub fn new(limiter: SimpleRateLimiter, trust_proxy: bool) -> Self {
        Self {
            limiter,
            trust_proxy,
        }
    }
}

fn insert_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    headers.insert(
        HeaderName::from_static("ratelimit-limit"),
        HeaderValue::from(decision.limit),
    );
    headers.insert(
        HeaderName::from_static("ratelimit-remaining"),
        HeaderValue::from(decision.remaining),
    );
    headers.insert(
        HeaderName::from_static("ratelimit-reset"),
        HeaderValue::from(decision.reset_after),
    );
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service,
            limiter: self.limiter.clone(),
            trust_proxy: self.trust_proxy,
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: S,
    limiter: SimpleRateLimiter,
    trust_proxy: bool,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let ip = throttle_key(req.request(), self.trust_proxy);
        let decision = self.limiter.check(&ip);

        if !decision.allowed {
            AuthAuditEvent::new(
                AuthEventType::RateLimitExceeded,
                ip,
                req.method().as_str(),
                req.path(),
            )
            .with_user_agent(extract_user_agent(req.request()))
            .log();

            let mut response = ApiError::TooManyRequests.error_response();
            insert_headers(response.headers_mut(), &decision);
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            insert_headers(res.headers_mut(), &decision);
            Ok(res.map_into_left_body())
        })
    }
}
