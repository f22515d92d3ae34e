//! Contact point handlers.
//!
//! A contact point is split over three tables: the point with its role, the
//! person details in `contact_point_info` and the link to its entity. Writes
//! touch all three in one transaction.

use crate::{
    entities::{
        contact_point, contact_point_info, entity_contact_point,
        prelude::{ContactPoint, ContactPointInfo, EntityContactPoint, ResearchEntity},
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        organization::{
            ContactPointInfoResponse, ContactPointListResponse, ContactPointPatch,
            ContactPointPayload, ContactPointResponse, NewContactPoint,
        },
    },
    services::{
        database::{ensure_exists, find_or_404},
        lookup, validation,
    },
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter,
    TransactionTrait,
};

async fn info_of(
    txn: &DatabaseTransaction,
    contact_point_id: i32,
) -> Result<Option<contact_point_info::Model>, ApiError> {
    Ok(ContactPointInfo::find()
        .filter(contact_point_info::Column::ContactPointId.eq(contact_point_id))
        .one(txn)
        .await?)
}

/// Contact points of the entity `{id}`
#[api_v2_operation(summary = "List contact points of an entity", tags("Contact points"))]
pub async fn list_for_entity(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ContactPointListResponse>, ApiError> {
    ensure_exists::<ResearchEntity, _>(&state.db, path.id, "Entity").await?;
    let contact_points = lookup::entity_contact_points(&state.db, path.id).await?;
    Ok(web::Json(ContactPointListResponse { contact_points }))
}

#[api_v2_operation(summary = "Create contact point", tags("Contact points"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<NewContactPoint>,
) -> Result<CreatedJson<ContactPointResponse>, ApiError> {
    let NewContactPoint {
        entity_id,
        role,
        name,
        email,
        phone,
        designation,
    } = payload.into_inner();
    let role = validation::name(&role, "role")?;
    let name = validation::name(&name, "name")?;
    let email = validation::email(&email)?;

    let txn = state.db.begin().await?;
    ensure_exists::<ResearchEntity, _>(&txn, entity_id, "Entity").await?;

    let point = contact_point::ActiveModel {
        role: ActiveValue::Set(role),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    entity_contact_point::ActiveModel {
        entity_id: ActiveValue::Set(entity_id),
        contact_point_id: ActiveValue::Set(point.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    contact_point_info::ActiveModel {
        contact_point_id: ActiveValue::Set(point.id),
        name: ActiveValue::Set(name),
        email: ActiveValue::Set(email),
        phone: ActiveValue::Set(phone),
        designation: ActiveValue::Set(designation),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    let contact_point = lookup::contact_point_view(&txn, point).await?;
    txn.commit().await?;

    tracing::info!(entity_id, contact_point_id = contact_point.id, "contact point created");
    Ok(CreatedJson(ContactPointResponse { contact_point }))
}

/// Replace the role and every person detail
#[api_v2_operation(summary = "Replace contact point", tags("Contact points"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ContactPointPayload>,
) -> Result<web::Json<ContactPointResponse>, ApiError> {
    let ContactPointPayload {
        role,
        name,
        email,
        phone,
        designation,
    } = payload.into_inner();
    let role = validation::name(&role, "role")?;
    let name = validation::name(&name, "name")?;
    let email = validation::email(&email)?;

    let txn = state.db.begin().await?;
    let point = find_or_404::<ContactPoint, _>(&txn, path.id, "Contact point").await?;
    let mut active: contact_point::ActiveModel = point.into();
    active.role = ActiveValue::Set(role);
    let point = active.update(&txn).await?;

    match info_of(&txn, point.id).await? {
        Some(info) => {
            let mut active: contact_point_info::ActiveModel = info.into();
            active.name = ActiveValue::Set(name);
            active.email = ActiveValue::Set(email);
            active.phone = ActiveValue::Set(phone);
            active.designation = ActiveValue::Set(designation);
            active.update(&txn).await?;
        }
        None => {
            contact_point_info::ActiveModel {
                contact_point_id: ActiveValue::Set(point.id),
                name: ActiveValue::Set(name),
                email: ActiveValue::Set(email),
                phone: ActiveValue::Set(phone),
                designation: ActiveValue::Set(designation),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }
    let contact_point = lookup::contact_point_view(&txn, point).await?;
    txn.commit().await?;

    Ok(web::Json(ContactPointResponse { contact_point }))
}

#[api_v2_operation(summary = "Update contact point", tags("Contact points"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ContactPointPatch>,
) -> Result<web::Json<ContactPointResponse>, ApiError> {
    let patch = payload.into_inner();

    let txn = state.db.begin().await?;
    let mut point = find_or_404::<ContactPoint, _>(&txn, path.id, "Contact point").await?;
    if let Some(role) = patch.role {
        let mut active: contact_point::ActiveModel = point.into();
        active.role = ActiveValue::Set(validation::name(&role, "role")?);
        point = active.update(&txn).await?;
    }

    let touches_info = patch.name.is_some()
        || patch.email.is_some()
        || patch.phone.is_some()
        || patch.designation.is_some();
    if touches_info {
        let info = info_of(&txn, point.id)
            .await?
            .ok_or_else(|| ApiError::not_found("Contact point information"))?;
        let mut active: contact_point_info::ActiveModel = info.into();
        if let Some(name) = patch.name {
            active.name = ActiveValue::Set(validation::name(&name, "name")?);
        }
        if let Some(email) = patch.email {
            active.email = ActiveValue::Set(validation::email(&email)?);
        }
        if let Some(phone) = patch.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(designation) = patch.designation {
            active.designation = ActiveValue::Set(Some(designation));
        }
        active.update(&txn).await?;
    }
    let contact_point = lookup::contact_point_view(&txn, point).await?;
    txn.commit().await?;

    Ok(web::Json(ContactPointResponse { contact_point }))
}

#[api_v2_operation(summary = "Delete contact point", tags("Contact points"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let id = path.id;
    let txn = state.db.begin().await?;
    ensure_exists::<ContactPoint, _>(&txn, id, "Contact point").await?;
    EntityContactPoint::delete_many()
        .filter(entity_contact_point::Column::ContactPointId.eq(id))
        .exec(&txn)
        .await?;
    ContactPointInfo::delete_many()
        .filter(contact_point_info::Column::ContactPointId.eq(id))
        .exec(&txn)
        .await?;
    ContactPoint::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(contact_point_id = id, "contact point deleted");
    Ok(web::Json(MessageResponse::new("Contact point deleted")))
}

/// Person details of the contact point `{id}`
#[api_v2_operation(summary = "Get contact point information", tags("Contact points"))]
pub async fn get_info(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ContactPointInfoResponse>, ApiError> {
    let info = ContactPointInfo::find()
        .filter(contact_point_info::Column::ContactPointId.eq(path.id))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact point information"))?;
    Ok(web::Json(ContactPointInfoResponse {
        contact_point_info: info.into(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/contactpoint").route(web::post().to(create)))
        .service(
            web::resource("/contactpoint/{id}")
                .route(web::get().to(list_for_entity))
                .route(web::put().to(update))
                .route(web::patch().to(patch))
                .route(web::delete().to(delete)),
        )
        .service(web::resource("/contactpointinfo/{id}").route(web::get().to(get_info)));
}
