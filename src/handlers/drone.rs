//! Drone handlers (`/drone`).

use super::drone_parts::{caller_company, company_part};
use crate::{
    entities::{
        drone, drone_has_part,
        prelude::{Drone, DroneHasPart},
    },
    error::ApiError,
    middleware::{Authorized, Members},
    models::{
        IdPath, MessageResponse,
        drone::{DroneDetailsResponse, DroneListResponse, DroneResponse, DroneUpdate, NewDrone},
    },
    services::lookup,
    state::AppState,
};
use chrono::Utc;
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

/// A drone the caller owns, or any drone for admins
pub(crate) async fn owned_drone<C: ConnectionTrait>(
    db: &C,
    caller: &Authorized<Members>,
    id: i32,
) -> Result<drone::Model, ApiError> {
    let drone = Drone::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found("Drone"))?;
    if !caller.is_self_or_admin(drone.user_id) {
        return Err(ApiError::forbidden());
    }
    Ok(drone)
}

#[api_v2_operation(summary = "List drones", tags("Drones"))]
pub async fn list(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<DroneListResponse>, ApiError> {
    let mut query = Drone::find().order_by_asc(drone::Column::Id);
    if !caller.is_admin() {
        query = query.filter(drone::Column::UserId.eq(caller.user_id()));
    }
    let drones = query.all(&state.db).await?;
    Ok(web::Json(DroneListResponse {
        drones: drones.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get drone with its parts", tags("Drones"))]
pub async fn get(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<DroneDetailsResponse>, ApiError> {
    let drone = owned_drone(&state.db, &caller, path.id).await?;
    let parts = lookup::drone_parts(&state.db, drone.id).await?;
    Ok(web::Json(DroneDetailsResponse {
        drone: drone.into(),
        parts: parts.into_iter().map(Into::into).collect(),
    }))
}

/// Create a drone owned by the caller, assembled from parts of their company
#[api_v2_operation(summary = "Create drone", tags("Drones"))]
pub async fn create(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    payload: web::Json<NewDrone>,
) -> Result<CreatedJson<DroneDetailsResponse>, ApiError> {
    let NewDrone {
        finish,
        mut part_ids,
    } = payload.into_inner();
    part_ids.sort_unstable();
    part_ids.dedup();

    let txn = state.db.begin().await?;
    let mut parts = Vec::with_capacity(part_ids.len());
    if !part_ids.is_empty() {
        let company_id = caller_company(&caller)?;
        for part_id in &part_ids {
            parts.push(company_part(&txn, *part_id, company_id).await?);
        }
    }

    let created = drone::ActiveModel {
        user_id: ActiveValue::Set(caller.user_id()),
        finish: ActiveValue::Set(finish),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    for part in &parts {
        drone_has_part::ActiveModel {
            drone_id: ActiveValue::Set(created.id),
            part_id: ActiveValue::Set(part.id),
        }
        .insert(&txn)
        .await?;
    }
    txn.commit().await?;

    tracing::info!(drone_id = created.id, parts = parts.len(), "drone created");
    Ok(CreatedJson(DroneDetailsResponse {
        drone: created.into(),
        parts: parts.into_iter().map(Into::into).collect(),
    }))
}

/// Set the `finish` flag; `PUT` and `PATCH` both land here
#[api_v2_operation(summary = "Update drone", tags("Drones"))]
pub async fn update(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<DroneUpdate>,
) -> Result<web::Json<DroneResponse>, ApiError> {
    let existing = owned_drone(&state.db, &caller, path.id).await?;
    let mut active: drone::ActiveModel = existing.into();
    active.finish = ActiveValue::Set(payload.finish);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(DroneResponse {
        drone: updated.into(),
    }))
}

#[api_v2_operation(summary = "Delete drone", tags("Drones"))]
pub async fn delete(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let txn = state.db.begin().await?;
    let drone = owned_drone(&txn, &caller, path.id).await?;
    DroneHasPart::delete_many()
        .filter(drone_has_part::Column::DroneId.eq(drone.id))
        .exec(&txn)
        .await?;
    Drone::delete_by_id(drone.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(drone_id = drone.id, "drone deleted");
    Ok(web::Json(MessageResponse::new("Drone deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/drone")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/drone/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(update))
            .route(web::delete().to(delete)),
    );
}
