//! Error types shared by handlers, extractors and startup code.

use crate::telemetry::redact_sensitive_data;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use paperclip::actix::api_v2_errors;
use sea_orm::SqlErr;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(false);

/// Include the underlying error detail in response bodies (`LOG_REAL_ERRORS`)
///
/// Process wide; [`create_app`](crate::create_app) applies the flag of the
/// state it is given.
pub fn expose_error_details(enabled: bool) {
    EXPOSE_DETAILS.store(enabled, Ordering::Relaxed);
}

/// Errors returned to HTTP clients
#[api_v2_errors(
    code = 400, description = "Invalid request payload or parameters",
    code = 401, description = "Missing, invalid or expired credentials",
    code = 403, description = "Authenticated but not allowed to access this resource",
    code = 404, description = "Resource not found",
    code = 409, description = "Resource already exists or is still referenced",
    code = 429, description = "Too many requests",
    code = 500, description = "Unexpected server error"
)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Too many requests to the server, please wait a moment.")]
    TooManyRequests,
    #[error("{0}")]
    Unavailable(String),
    #[error("Database error")]
    Database(#[source] sea_orm::DbErr),
    #[error("Something went wrong!")]
    Internal(String),
}

impl From<sea_orm::DbErr> for ApiError {
    /// Unique constraint violations become 409, everything else is a 500
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Self::Conflict("Resource already exists".to_string())
            }
            _ => Self::Database(err),
        }
    }
}

impl ApiError {
    /// `"<what> not found"`
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }

    pub fn forbidden() -> Self {
        Self::Forbidden("You do not have enough permissions to access this resource.".to_string())
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Database(e) => Some(e.to_string()),
            Self::Internal(detail) => Some(detail.clone()),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = self.detail();
        if let Some(detail) = &detail {
            tracing::error!(error = %redact_sensitive_data(detail), "request failed");
        }

        let body = ErrorBody {
            message: self.to_string(),
            error: detail.filter(|_| EXPOSE_DETAILS.load(Ordering::Relaxed)),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Errors raised while loading configuration or preparing the server
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::not_found("Keyword").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::forbidden().status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Database(sea_orm::DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::TooManyRequests.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::not_found("Company").to_string(), "Company not found");
    }
}
