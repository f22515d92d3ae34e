//! Sharing contact points between research entities (`/entitycontactpoints`).

use crate::{
    entities::{
        entity_contact_point,
        prelude::{ContactPoint, EntityContactPoint, ResearchEntity},
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, links::EntityContactPointLink,
        organization::ContactPointListResponse,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

#[api_v2_operation(summary = "List contact points linked to an entity", tags("Contact points"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<ContactPointListResponse>, ApiError> {
    ensure_exists::<ResearchEntity, _>(&state.db, path.owner_id, "Entity").await?;
    let contact_points = lookup::entity_contact_points(&state.db, path.owner_id).await?;
    Ok(web::Json(ContactPointListResponse { contact_points }))
}

#[api_v2_operation(summary = "Link a contact point to an entity", tags("Contact points"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<EntityContactPointLink>,
) -> Result<CreatedJson<EntityContactPointLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<ResearchEntity, _>(&state.db, link.entity_id, "Entity").await?;
    ensure_exists::<ContactPoint, _>(&state.db, link.contact_point_id, "Contact point").await?;

    let existing = EntityContactPoint::find()
        .filter(entity_contact_point::Column::EntityId.eq(link.entity_id))
        .filter(entity_contact_point::Column::ContactPointId.eq(link.contact_point_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Contact point is already linked to this entity".to_string(),
        ));
    }

    entity_contact_point::ActiveModel {
        entity_id: ActiveValue::Set(link.entity_id),
        contact_point_id: ActiveValue::Set(link.contact_point_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a contact point from an entity", tags("Contact points"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = EntityContactPoint::delete_many()
        .filter(entity_contact_point::Column::EntityId.eq(path.owner_id))
        .filter(entity_contact_point::Column::ContactPointId.eq(path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new(
        "Contact point removed from entity",
    )))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/entitycontactpoints").route(web::post().to(link)))
        .service(web::resource("/entitycontactpoints/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/entitycontactpoints/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
