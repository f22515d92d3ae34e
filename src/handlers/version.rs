//! Version information endpoint handler.

use crate::models::VersionResponse;
use paperclip::actix::{api_v2_operation, web};

/// Version information endpoint
///
/// Returns the crate version plus the commit and build time stamped by the
/// build script; both read `unknown` outside a git checkout.
#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current API version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse),
        (status = 429, description = "Too Many Requests")
    )
)]
pub async fn version() -> web::Json<VersionResponse> {
    web::Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown").to_string(),
        build_time: option_env!("VERGEN_BUILD_TIMESTAMP")
            .unwrap_or("unknown")
            .to_string(),
    })
}
