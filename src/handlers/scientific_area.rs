//! Scientific area handlers.

use crate::{
    entities::{
        prelude::{ProjectScientificArea, ScientificArea, ScientificDomain},
        project_scientific_area, scientific_area,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        catalog::{
            ScientificAreaListResponse, ScientificAreaPatch, ScientificAreaPayload,
            ScientificAreaQuery, ScientificAreaResponse,
        },
    },
    services::{
        database::{ensure_exists, find_or_404},
        validation,
    },
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

/// All scientific areas, or those of one domain with `?domainId=`
#[api_v2_operation(summary = "List scientific areas", tags("Scientific areas"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    query: web::Query<ScientificAreaQuery>,
) -> Result<web::Json<ScientificAreaListResponse>, ApiError> {
    let mut select = ScientificArea::find().order_by_asc(scientific_area::Column::Id);
    if let Some(domain_id) = query.domain_id {
        select = select.filter(scientific_area::Column::ScientificDomainId.eq(domain_id));
    }
    let areas = select.all(&state.db).await?;
    Ok(web::Json(ScientificAreaListResponse {
        scientific_areas: areas.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get scientific area", tags("Scientific areas"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ScientificAreaResponse>, ApiError> {
    let area = find_or_404::<ScientificArea, _>(&state.db, path.id, "Scientific area").await?;
    Ok(web::Json(ScientificAreaResponse {
        scientific_area: area.into(),
    }))
}

#[api_v2_operation(summary = "Create scientific area", tags("Scientific areas"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ScientificAreaPayload>,
) -> Result<CreatedJson<ScientificAreaResponse>, ApiError> {
    let name = validation::name(&payload.name, "name")?;
    ensure_exists::<ScientificDomain, _>(&state.db, payload.scientific_domain_id, "Scientific domain")
        .await?;

    let created = scientific_area::ActiveModel {
        name: ActiveValue::Set(name),
        scientific_domain_id: ActiveValue::Set(payload.scientific_domain_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(scientific_area_id = created.id, "scientific area created");
    Ok(CreatedJson(ScientificAreaResponse {
        scientific_area: created.into(),
    }))
}

#[api_v2_operation(summary = "Replace scientific area", tags("Scientific areas"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ScientificAreaPayload>,
) -> Result<web::Json<ScientificAreaResponse>, ApiError> {
    let existing = find_or_404::<ScientificArea, _>(&state.db, path.id, "Scientific area").await?;
    let name = validation::name(&payload.name, "name")?;
    ensure_exists::<ScientificDomain, _>(&state.db, payload.scientific_domain_id, "Scientific domain")
        .await?;

    let mut active: scientific_area::ActiveModel = existing.into();
    active.name = ActiveValue::Set(name);
    active.scientific_domain_id = ActiveValue::Set(payload.scientific_domain_id);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(ScientificAreaResponse {
        scientific_area: updated.into(),
    }))
}

#[api_v2_operation(summary = "Update scientific area", tags("Scientific areas"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ScientificAreaPatch>,
) -> Result<web::Json<ScientificAreaResponse>, ApiError> {
    let existing = find_or_404::<ScientificArea, _>(&state.db, path.id, "Scientific area").await?;
    let patch = payload.into_inner();
    let mut active: scientific_area::ActiveModel = existing.into();

    if let Some(name) = patch.name {
        active.name = ActiveValue::Set(validation::name(&name, "name")?);
    }
    if let Some(domain_id) = patch.scientific_domain_id {
        ensure_exists::<ScientificDomain, _>(&state.db, domain_id, "Scientific domain").await?;
        active.scientific_domain_id = ActiveValue::Set(domain_id);
    }
    let updated = active.update(&state.db).await?;

    Ok(web::Json(ScientificAreaResponse {
        scientific_area: updated.into(),
    }))
}

#[api_v2_operation(summary = "Delete scientific area", tags("Scientific areas"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let txn = state.db.begin().await?;
    ensure_exists::<ScientificArea, _>(&txn, path.id, "Scientific area").await?;
    ProjectScientificArea::delete_many()
        .filter(project_scientific_area::Column::ScientificAreaId.eq(path.id))
        .exec(&txn)
        .await?;
    ScientificArea::delete_by_id(path.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(scientific_area_id = path.id, "scientific area deleted");
    Ok(web::Json(MessageResponse::new("Scientific area deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/scientificarea")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/scientificarea/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
