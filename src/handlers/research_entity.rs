//! Research entity handlers (`/entity`).

use crate::{
    entities::{
        entity_contact_point, entity_funding,
        prelude::{EntityContactPoint, EntityFunding, ResearchEntity},
        research_entity,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        organization::{EntityListResponse, EntityPatch, EntityPayload, EntityResponse},
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

fn apply(active: &mut research_entity::ActiveModel, payload: EntityPayload) -> Result<(), ApiError> {
    active.name = ActiveValue::Set(validation::name(&payload.name, "name")?);
    active.description = ActiveValue::Set(payload.description);
    active.acronym = ActiveValue::Set(payload.acronym);
    active.address = ActiveValue::Set(payload.address);
    active.url = ActiveValue::Set(payload.url);
    active.country = ActiveValue::Set(payload.country);
    Ok(())
}

#[api_v2_operation(summary = "List research entities", tags("Entities"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<EntityListResponse>, ApiError> {
    let entities = ResearchEntity::find()
        .order_by_asc(research_entity::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(EntityListResponse {
        entities: entities.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get research entity", tags("Entities"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<EntityResponse>, ApiError> {
    let entity = find_or_404::<ResearchEntity, _>(&state.db, path.id, "Entity").await?;
    Ok(web::Json(EntityResponse {
        entity: entity.into(),
    }))
}

#[api_v2_operation(summary = "Create research entity", tags("Entities"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<EntityPayload>,
) -> Result<CreatedJson<EntityResponse>, ApiError> {
    let mut active = <research_entity::ActiveModel as Default>::default();
    apply(&mut active, payload.into_inner())?;
    let created = active.insert(&state.db).await?;

    tracing::info!(entity_id = created.id, "research entity created");
    Ok(CreatedJson(EntityResponse {
        entity: created.into(),
    }))
}

#[api_v2_operation(summary = "Replace research entity", tags("Entities"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<EntityPayload>,
) -> Result<web::Json<EntityResponse>, ApiError> {
    let existing = find_or_404::<ResearchEntity, _>(&state.db, path.id, "Entity").await?;
    let mut active: research_entity::ActiveModel = existing.into();
    apply(&mut active, payload.into_inner())?;
    let updated = active.update(&state.db).await?;

    Ok(web::Json(EntityResponse {
        entity: updated.into(),
    }))
}

#[api_v2_operation(summary = "Update research entity", tags("Entities"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<EntityPatch>,
) -> Result<web::Json<EntityResponse>, ApiError> {
    let existing = find_or_404::<ResearchEntity, _>(&state.db, path.id, "Entity").await?;
    let patch = payload.into_inner();
    let mut active: research_entity::ActiveModel = existing.into();

    if let Some(name) = patch.name {
        active.name = ActiveValue::Set(validation::name(&name, "name")?);
    }
    if let Some(description) = patch.description {
        active.description = ActiveValue::Set(description);
    }
    if let Some(acronym) = patch.acronym {
        active.acronym = ActiveValue::Set(acronym);
    }
    if let Some(address) = patch.address {
        active.address = ActiveValue::Set(address);
    }
    if let Some(url) = patch.url {
        active.url = ActiveValue::Set(url);
    }
    if let Some(country) = patch.country {
        active.country = ActiveValue::Set(country);
    }
    let updated = active.update(&state.db).await?;

    Ok(web::Json(EntityResponse {
        entity: updated.into(),
    }))
}

#[api_v2_operation(summary = "Delete research entity", tags("Entities"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let id = path.id;
    let txn = state.db.begin().await?;
    ensure_exists::<ResearchEntity, _>(&txn, id, "Entity").await?;
    EntityContactPoint::delete_many()
        .filter(entity_contact_point::Column::EntityId.eq(id))
        .exec(&txn)
        .await?;
    EntityFunding::delete_many()
        .filter(entity_funding::Column::EntityId.eq(id))
        .exec(&txn)
        .await?;
    ResearchEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(entity_id = id, "research entity deleted");
    Ok(web::Json(MessageResponse::new("Entity deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/entity")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/entity/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
