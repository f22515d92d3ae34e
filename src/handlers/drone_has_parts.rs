//! Drone to part links (`/dronehasparts`); only the drone's owner or an admin.

use super::{
    drone::owned_drone,
    drone_parts::{caller_company, company_part},
};
use crate::{
    entities::{drone_has_part, prelude::DroneHasPart},
    error::ApiError,
    middleware::{Authorized, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, drone::DronePartListResponse, links::DronePartLink,
    },
    services::lookup,
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

#[api_v2_operation(summary = "List parts of a drone", tags("Drones"))]
pub async fn list(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<DronePartListResponse>, ApiError> {
    let drone = owned_drone(&state.db, &caller, path.owner_id).await?;
    let parts = lookup::drone_parts(&state.db, drone.id).await?;
    Ok(web::Json(DronePartListResponse {
        parts: parts.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Add a part to a drone", tags("Drones"))]
pub async fn link(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    payload: web::Json<DronePartLink>,
) -> Result<CreatedJson<DronePartLink>, ApiError> {
    let link = payload.into_inner();
    let drone = owned_drone(&state.db, &caller, link.drone_id).await?;
    let company_id = caller_company(&caller)?;
    let part = company_part(&state.db, link.part_id, company_id).await?;

    let existing = DroneHasPart::find_by_id((drone.id, part.id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Part is already mounted on this drone".to_string(),
        ));
    }

    drone_has_part::ActiveModel {
        drone_id: ActiveValue::Set(drone.id),
        part_id: ActiveValue::Set(part.id),
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Remove a part from a drone", tags("Drones"))]
pub async fn unlink(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let drone = owned_drone(&state.db, &caller, path.owner_id).await?;
    let result = DroneHasPart::delete_by_id((drone.id, path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new("Part removed from drone")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dronehasparts").route(web::post().to(link)))
        .service(web::resource("/dronehasparts/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/dronehasparts/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
