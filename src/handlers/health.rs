//! Health check endpoint handler.

use crate::{models::HealthResponse, state::AppState};
use actix_web::HttpResponse;
use paperclip::actix::{api_v2_operation, web};

/// Health check endpoint
///
/// Reports whether the process is up and the database answers a ping. Load
/// balancers and container probes poll it.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the health of the API and of its database connection.",
    tags("Health"),
    responses(
        (status = 200, description = "Healthy", body = HealthResponse),
        (status = 503, description = "The database is unreachable", body = HealthResponse)
    )
)]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    match state.db.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "up".to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "database ping failed");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unhealthy".to_string(),
                database: "down".to_string(),
            })
        }
    }
}
