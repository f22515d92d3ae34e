//! JSON body sanitization middleware.

use crate::services::sanitize::sanitize_value;
use actix_web::{
    Error, HttpMessage,
    dev::{self, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{CONTENT_LENGTH, HeaderValue},
    web::Bytes,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    rc::Rc,
};

/// Sanitizes every string of a JSON request body before handlers see it
pub struct Sanitize;

impl<S, B> Transform<S, ServiceRequest> for Sanitize
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SanitizeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SanitizeMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SanitizeMiddleware<S> {
    service: Rc<S>,
}

fn is_json(req: &ServiceRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// The sanitized body, or `None` when `body` is not JSON
fn sanitize_body(body: &[u8]) -> Option<Bytes> {
    let mut value: serde_json::Value = serde_json::from_slice(body).ok()?;
    sanitize_value(&mut value);
    serde_json::to_vec(&value).ok().map(Bytes::from)
}

impl<S, B> Service<ServiceRequest> for SanitizeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_json(&req) {
                let body = req.extract::<Bytes>().await?;
                let body = match sanitize_body(&body) {
                    Some(clean) => {
                        req.headers_mut()
                            .insert(CONTENT_LENGTH, HeaderValue::from(clean.len()));
                        clean
                    }
                    // Let the handler's JSON extractor report the error
                    None => body,
                };
                req.set_payload(dev::Payload::from(body));
            }
            service.call(req).await
        })
    }
}
