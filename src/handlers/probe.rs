//! `/test` probe endpoints.

use crate::{
    middleware::{Authorized, PlainUsers},
    models::MessageResponse,
};
use paperclip::actix::{api_v2_operation, web};

#[api_v2_operation(summary = "Probe GET", tags("Test"))]
pub async fn get(_caller: Authorized<PlainUsers>) -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("GET"))
}

#[api_v2_operation(summary = "Probe POST", tags("Test"))]
pub async fn post() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("POST"))
}

#[api_v2_operation(summary = "Probe PUT", tags("Test"))]
pub async fn put() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("PUT"))
}

#[api_v2_operation(summary = "Probe PATCH", tags("Test"))]
pub async fn patch() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("PATCH"))
}

#[api_v2_operation(summary = "Probe DELETE", tags("Test"))]
pub async fn delete() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("DELETE"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/test")
            .route(web::get().to(get))
            .route(web::post().to(post))
            .route(web::put().to(put))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
