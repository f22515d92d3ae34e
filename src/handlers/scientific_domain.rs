//! Scientific domain handlers.

use crate::{
    entities::{
        prelude::{ProjectScientificDomain, ScientificArea, ScientificDomain},
        project_scientific_domain, scientific_area, scientific_domain,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        catalog::{NamePayload, ScientificDomainListResponse, ScientificDomainResponse},
    },
    services::{
        database::{ensure_exists, find_or_404},
        validation,
    },
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

#[api_v2_operation(summary = "List scientific domains", tags("Scientific domains"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<ScientificDomainListResponse>, ApiError> {
    let domains = ScientificDomain::find()
        .order_by_asc(scientific_domain::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(ScientificDomainListResponse {
        scientific_domains: domains.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get scientific domain", tags("Scientific domains"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ScientificDomainResponse>, ApiError> {
    let domain = find_or_404::<ScientificDomain, _>(&state.db, path.id, "Scientific domain").await?;
    Ok(web::Json(ScientificDomainResponse {
        scientific_domain: domain.into(),
    }))
}

#[api_v2_operation(summary = "Create scientific domain", tags("Scientific domains"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<NamePayload>,
) -> Result<CreatedJson<ScientificDomainResponse>, ApiError> {
    let created = scientific_domain::ActiveModel {
        name: ActiveValue::Set(validation::name(&payload.name, "name")?),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(scientific_domain_id = created.id, "scientific domain created");
    Ok(CreatedJson(ScientificDomainResponse {
        scientific_domain: created.into(),
    }))
}

#[api_v2_operation(summary = "Update scientific domain", tags("Scientific domains"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<NamePayload>,
) -> Result<web::Json<ScientificDomainResponse>, ApiError> {
    let existing = find_or_404::<ScientificDomain, _>(&state.db, path.id, "Scientific domain").await?;
    let mut active: scientific_domain::ActiveModel = existing.into();
    active.name = ActiveValue::Set(validation::name(&payload.name, "name")?);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(ScientificDomainResponse {
        scientific_domain: updated.into(),
    }))
}

/// Domains that still own scientific areas cannot be deleted
#[api_v2_operation(summary = "Delete scientific domain", tags("Scientific domains"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let txn = state.db.begin().await?;
    ensure_exists::<ScientificDomain, _>(&txn, path.id, "Scientific domain").await?;

    let areas = ScientificArea::find()
        .filter(scientific_area::Column::ScientificDomainId.eq(path.id))
        .count(&txn)
        .await?;
    if areas > 0 {
        return Err(ApiError::Conflict(format!(
            "Scientific domain still has {areas} scientific area(s)"
        )));
    }

    ProjectScientificDomain::delete_many()
        .filter(project_scientific_domain::Column::ScientificDomainId.eq(path.id))
        .exec(&txn)
        .await?;
    ScientificDomain::delete_by_id(path.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(scientific_domain_id = path.id, "scientific domain deleted");
    Ok(web::Json(MessageResponse::new("Scientific domain deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/scientificdomain")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/scientificdomain/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(update))
            .route(web::delete().to(delete)),
    );
}
