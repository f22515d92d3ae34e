//! Drone part handlers (`/droneparts`).
//!
//! Parts belong to a company; every request is scoped to the `companyId`
//! claim of the caller, and a part of another company reads as missing.

use crate::{
    entities::{
        drone_has_part, drone_part,
        prelude::{DroneHasPart, DronePart},
    },
    error::ApiError,
    middleware::{Authorized, Members},
    models::{
        IdPath, MessageResponse,
        drone::{self, DronePartPatch, DronePartPayload},
    },
    services::validation,
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

/// Company of the caller, 403 for users outside any company
pub(crate) fn caller_company<R>(caller: &Authorized<R>) -> Result<i32, ApiError> {
    caller.company_id.ok_or_else(|| {
        ApiError::Forbidden("You must belong to a company to manage drone parts.".to_string())
    })
}

/// A part of `company_id`, 404 when missing or owned by another company
pub(crate) async fn company_part<C: ConnectionTrait>(
    db: &C,
    id: i32,
    company_id: i32,
) -> Result<drone_part::Model, ApiError> {
    DronePart::find_by_id(id)
        .one(db)
        .await?
        .filter(|part| part.company_id == company_id)
        .ok_or_else(|| ApiError::not_found("Drone part"))
}

#[api_v2_operation(summary = "List the drone parts of your company", tags("Drone parts"))]
pub async fn list(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<Vec<drone::DronePart>>, ApiError> {
    let company_id = caller_company(&caller)?;
    let parts = DronePart::find()
        .filter(drone_part::Column::CompanyId.eq(company_id))
        .order_by_asc(drone_part::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(parts.into_iter().map(Into::into).collect()))
}

#[api_v2_operation(summary = "Get drone part", tags("Drone parts"))]
pub async fn get(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<drone::DronePart>, ApiError> {
    let company_id = caller_company(&caller)?;
    let part = company_part(&state.db, path.id, company_id).await?;
    Ok(web::Json(part.into()))
}

#[api_v2_operation(summary = "Create drone part", tags("Drone parts"))]
pub async fn create(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    payload: web::Json<DronePartPayload>,
) -> Result<CreatedJson<drone::DronePart>, ApiError> {
    let company_id = caller_company(&caller)?;
    let DronePartPayload { name, quantity } = payload.into_inner();
    let name = validation::name(&name, "name")?;
    validation::non_negative_count(quantity, "quantity")?;

    let created = drone_part::ActiveModel {
        name: ActiveValue::Set(name),
        quantity: ActiveValue::Set(quantity),
        company_id: ActiveValue::Set(company_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(part_id = created.id, company_id, "drone part created");
    Ok(CreatedJson(created.into()))
}

#[api_v2_operation(summary = "Replace drone part", tags("Drone parts"))]
pub async fn update(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<DronePartPayload>,
) -> Result<web::Json<drone::DronePart>, ApiError> {
    let company_id = caller_company(&caller)?;
    let DronePartPayload { name, quantity } = payload.into_inner();
    let name = validation::name(&name, "name")?;
    validation::non_negative_count(quantity, "quantity")?;

    let existing = company_part(&state.db, path.id, company_id).await?;
    let mut active: drone_part::ActiveModel = existing.into();
    active.name = ActiveValue::Set(name);
    active.quantity = ActiveValue::Set(quantity);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(updated.into()))
}

#[api_v2_operation(summary = "Update drone part", tags("Drone parts"))]
pub async fn patch(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<DronePartPatch>,
) -> Result<web::Json<drone::DronePart>, ApiError> {
    let company_id = caller_company(&caller)?;
    let patch = payload.into_inner();
    let existing = company_part(&state.db, path.id, company_id).await?;
    let mut active: drone_part::ActiveModel = existing.into();

    if let Some(name) = patch.name {
        active.name = ActiveValue::Set(validation::name(&name, "name")?);
    }
    if let Some(quantity) = patch.quantity {
        validation::non_negative_count(quantity, "quantity")?;
        active.quantity = ActiveValue::Set(quantity);
    }
    let updated = active.update(&state.db).await?;

    Ok(web::Json(updated.into()))
}

#[api_v2_operation(summary = "Delete drone part", tags("Drone parts"))]
pub async fn delete(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let company_id = caller_company(&caller)?;
    let txn = state.db.begin().await?;
    let part = company_part(&txn, path.id, company_id).await?;
    DroneHasPart::delete_many()
        .filter(drone_has_part::Column::PartId.eq(part.id))
        .exec(&txn)
        .await?;
    DronePart::delete_by_id(part.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(part_id = part.id, company_id, "drone part deleted");
    Ok(web::Json(MessageResponse::new("Drone part deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/droneparts")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(web::resource("/droneparts/all").route(web::get().to(list)))
    .service(
        web::resource("/droneparts/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
