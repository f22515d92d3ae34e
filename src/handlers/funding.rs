//! Funding handlers.

use crate::{
    entities::{
        entity_funding, funding,
        prelude::{EntityFunding, Funding, ProgramFunding, ProjectFunding},
        program_funding, project_funding,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        funding::{FundingListResponse, FundingPatch, FundingPayload, FundingResponse},
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

#[api_v2_operation(summary = "List fundings", tags("Fundings"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<FundingListResponse>, ApiError> {
    let fundings = Funding::find()
        .order_by_asc(funding::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(FundingListResponse {
        fundings: fundings.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get funding", tags("Fundings"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<FundingResponse>, ApiError> {
    let funding = find_or_404::<Funding, _>(&state.db, path.id, "Funding").await?;
    Ok(web::Json(FundingResponse {
        funding: funding.into(),
    }))
}

#[api_v2_operation(summary = "Create funding", tags("Fundings"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<FundingPayload>,
) -> Result<CreatedJson<FundingResponse>, ApiError> {
    validation::non_negative(payload.value, "value")?;
    let created = funding::ActiveModel {
        is_intern: ActiveValue::Set(payload.is_intern),
        value: ActiveValue::Set(payload.value),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(funding_id = created.id, "funding created");
    Ok(CreatedJson(FundingResponse {
        funding: created.into(),
    }))
}

#[api_v2_operation(summary = "Replace funding", tags("Fundings"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<FundingPayload>,
) -> Result<web::Json<FundingResponse>, ApiError> {
    let existing = find_or_404::<Funding, _>(&state.db, path.id, "Funding").await?;
    validation::non_negative(payload.value, "value")?;
    let mut active: funding::ActiveModel = existing.into();
    active.is_intern = ActiveValue::Set(payload.is_intern);
    active.value = ActiveValue::Set(payload.value);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(FundingResponse {
        funding: updated.into(),
    }))
}

#[api_v2_operation(summary = "Update funding", tags("Fundings"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<FundingPatch>,
) -> Result<web::Json<FundingResponse>, ApiError> {
    let existing = find_or_404::<Funding, _>(&state.db, path.id, "Funding").await?;
    let mut active: funding::ActiveModel = existing.into();
    if let Some(is_intern) = payload.is_intern {
        active.is_intern = ActiveValue::Set(is_intern);
    }
    if let Some(value) = payload.value {
        validation::non_negative(value, "value")?;
        active.value = ActiveValue::Set(value);
    }
    let updated = active.update(&state.db).await?;

    Ok(web::Json(FundingResponse {
        funding: updated.into(),
    }))
}

/// Removes the funding from every project, entity and program as well
#[api_v2_operation(summary = "Delete funding", tags("Fundings"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let id = path.id;
    let txn = state.db.begin().await?;
    ensure_exists::<Funding, _>(&txn, id, "Funding").await?;
    ProjectFunding::delete_many()
        .filter(project_funding::Column::FundingId.eq(id))
        .exec(&txn)
        .await?;
    EntityFunding::delete_many()
        .filter(entity_funding::Column::FundingId.eq(id))
        .exec(&txn)
        .await?;
    ProgramFunding::delete_many()
        .filter(program_funding::Column::FundingId.eq(id))
        .exec(&txn)
        .await?;
    Funding::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(funding_id = id, "funding deleted");
    Ok(web::Json(MessageResponse::new("Funding deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/funding")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/funding/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
