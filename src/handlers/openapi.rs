//! OpenAPI specification generation and app factory.

use crate::{
    config::CorsConfig,
    error::{ApiError, expose_error_details},
    handlers::{health, version},
    middleware::{Authenticate, RateLimit, RequestIdMiddleware, Sanitize, SecurityHeaders},
    routes,
    state::AppState,
};
use actix_cors::Cors;
use actix_web::{
    App,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{Method, header},
    web::{JsonConfig, PathConfig, PayloadConfig, QueryConfig},
};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Research Projects API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Research projects, people and funding, plus a company / drone inventory module.\n\n\
                ## Authentication\n\
                `POST /login` returns a signed JWT, also set as the `token` cookie. Send it back \
                either as that cookie or as `Authorization: Bearer <token>`.\n\
                \n\
                **Roles:**\n\
                - `admin`: everything, including user and company administration\n\
                - `project_creator`: creates and edits research data\n\
                - `user`: reads research data, manages their own drones\n\
                \n\
                ## Microservices\n\
                `SERVICE_IDS` selects the controllers a process mounts: `1` for research \
                projects, `2` for companies and drones. Authentication and the probe \
                endpoints are always mounted.\n\
                \n\
                ## Limits\n\
                Every client IP is limited to `RATE_LIMIT_MAX` requests per \
                `RATE_LIMIT_WINDOW` seconds; the `ratelimit-*` response headers report \
                the remaining budget."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
        .allowed_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allowed_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
            header::HeaderName::from_static("timestamp"),
        ])
}

/// Builds the application for `state`
///
/// Mounts the controllers selected by `SERVICE_IDS` together with the
/// health, version and OpenAPI endpoints, behind request ids, CORS,
/// security headers, rate limiting, token authentication and body
/// sanitization (outermost first). The server and the integration tests
/// both start from here.
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = state.config.clone();
    let body_limit = config.body_limit;
    expose_error_details(config.log_real_errors);

    App::new()
        .wrap(Sanitize)
        .wrap(Authenticate::new(state.tokens.clone()))
        .wrap(RateLimit::new(
            state.limiter.clone(),
            config.server.trust_proxy,
        ))
        .wrap(SecurityHeaders::new(config.security.clone()))
        .wrap(cors(&config.cors))
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(state))
        .app_data(
            JsonConfig::default()
                .limit(body_limit)
                .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
        )
        .app_data(PayloadConfig::new(body_limit))
        .app_data(
            PathConfig::default().error_handler(|_err, _req| ApiError::not_found("Resource").into()),
        )
        .app_data(
            QueryConfig::default()
                .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
        )
        .configure(|cfg| routes::mount(cfg, &config.routing))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
