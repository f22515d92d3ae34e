//! Project to scientific area links (`/projectscientificareas`).

use crate::{
    entities::{
        prelude::{Project, ProjectScientificArea, ScientificArea},
        project_scientific_area,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, catalog::ScientificAreaListResponse,
        links::ProjectScientificAreaLink,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

#[api_v2_operation(summary = "List scientific areas of a project", tags("Project links"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<ScientificAreaListResponse>, ApiError> {
    ensure_exists::<Project, _>(&state.db, path.owner_id, "Project").await?;
    let areas = lookup::project_scientific_areas(&state.db, path.owner_id).await?;
    Ok(web::Json(ScientificAreaListResponse {
        scientific_areas: areas.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Link a scientific area to a project", tags("Project links"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ProjectScientificAreaLink>,
) -> Result<CreatedJson<ProjectScientificAreaLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<Project, _>(&state.db, link.project_id, "Project").await?;
    ensure_exists::<ScientificArea, _>(&state.db, link.scientific_area_id, "Scientific area")
        .await?;

    let existing = ProjectScientificArea::find()
        .filter(project_scientific_area::Column::ProjectId.eq(link.project_id))
        .filter(project_scientific_area::Column::ScientificAreaId.eq(link.scientific_area_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Scientific area is already linked to this project".to_string(),
        ));
    }

    project_scientific_area::ActiveModel {
        project_id: ActiveValue::Set(link.project_id),
        scientific_area_id: ActiveValue::Set(link.scientific_area_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a scientific area from a project", tags("Project links"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = ProjectScientificArea::delete_many()
        .filter(project_scientific_area::Column::ProjectId.eq(path.owner_id))
        .filter(project_scientific_area::Column::ScientificAreaId.eq(path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new(
        "Scientific area removed from project",
    )))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projectscientificareas").route(web::post().to(link)))
        .service(web::resource("/projectscientificareas/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/projectscientificareas/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
