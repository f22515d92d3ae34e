//! Project to funding links (`/projectfundings`).
//!
//! `project_fundings` is keyed by the pair itself, so a duplicate insert would
//! also fail at the database; it is checked first to answer 409.

use crate::{
    entities::{
        prelude::{Funding, Project, ProjectFunding},
        project_funding,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, funding::FundingListResponse,
        links::ProjectFundingLink,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

#[api_v2_operation(summary = "List fundings of a project", tags("Project links"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<FundingListResponse>, ApiError> {
    ensure_exists::<Project, _>(&state.db, path.owner_id, "Project").await?;
    let fundings = lookup::project_fundings(&state.db, path.owner_id).await?;
    Ok(web::Json(FundingListResponse {
        fundings: fundings.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Link a funding to a project", tags("Project links"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ProjectFundingLink>,
) -> Result<CreatedJson<ProjectFundingLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<Project, _>(&state.db, link.project_id, "Project").await?;
    ensure_exists::<Funding, _>(&state.db, link.funding_id, "Funding").await?;

    let existing = ProjectFunding::find_by_id((link.project_id, link.funding_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Funding is already linked to this project".to_string(),
        ));
    }

    project_funding::ActiveModel {
        project_id: ActiveValue::Set(link.project_id),
        funding_id: ActiveValue::Set(link.funding_id),
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a funding from a project", tags("Project links"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = ProjectFunding::delete_by_id((path.owner_id, path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new("Funding removed from project")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projectfundings").route(web::post().to(link)))
        .service(web::resource("/projectfundings/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/projectfundings/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
