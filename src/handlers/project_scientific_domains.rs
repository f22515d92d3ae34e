//! Project to scientific domain links (`/projectscientificdomains`).

use crate::{
    entities::{
        prelude::{Project, ProjectScientificDomain, ScientificDomain},
        project_scientific_domain,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, catalog::ScientificDomainListResponse,
        links::ProjectScientificDomainLink,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

#[api_v2_operation(summary = "List scientific domains of a project", tags("Project links"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<ScientificDomainListResponse>, ApiError> {
    ensure_exists::<Project, _>(&state.db, path.owner_id, "Project").await?;
    let domains = lookup::project_scientific_domains(&state.db, path.owner_id).await?;
    Ok(web::Json(ScientificDomainListResponse {
        scientific_domains: domains.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Link a scientific domain to a project", tags("Project links"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ProjectScientificDomainLink>,
) -> Result<CreatedJson<ProjectScientificDomainLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<Project, _>(&state.db, link.project_id, "Project").await?;
    ensure_exists::<ScientificDomain, _>(&state.db, link.scientific_domain_id, "Scientific domain")
        .await?;

    let existing = ProjectScientificDomain::find()
        .filter(project_scientific_domain::Column::ProjectId.eq(link.project_id))
        .filter(
            project_scientific_domain::Column::ScientificDomainId.eq(link.scientific_domain_id),
        )
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Scientific domain is already linked to this project".to_string(),
        ));
    }

    project_scientific_domain::ActiveModel {
        project_id: ActiveValue::Set(link.project_id),
        scientific_domain_id: ActiveValue::Set(link.scientific_domain_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a scientific domain from a project", tags("Project links"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = ProjectScientificDomain::delete_many()
        .filter(project_scientific_domain::Column::ProjectId.eq(path.owner_id))
        .filter(project_scientific_domain::Column::ScientificDomainId.eq(path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new(
        "Scientific domain removed from project",
    )))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projectscientificdomains").route(web::post().to(link)))
        .service(
            web::resource("/projectscientificdomains/{owner_id}").route(web::get().to(list)),
        )
        .service(
            web::resource("/projectscientificdomains/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
