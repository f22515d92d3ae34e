//! Research entity to funding links (`/entityfundings`).

use crate::{
    entities::{
        entity_funding,
        prelude::{EntityFunding, Funding, ResearchEntity},
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, funding::FundingListResponse,
        links::EntityFundingLink,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

#[api_v2_operation(summary = "List fundings of an entity", tags("Fundings"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<FundingListResponse>, ApiError> {
    ensure_exists::<ResearchEntity, _>(&state.db, path.owner_id, "Entity").await?;
    let fundings = lookup::entity_fundings(&state.db, path.owner_id).await?;
    Ok(web::Json(FundingListResponse {
        fundings: fundings.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Link a funding to an entity", tags("Fundings"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<EntityFundingLink>,
) -> Result<CreatedJson<EntityFundingLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<ResearchEntity, _>(&state.db, link.entity_id, "Entity").await?;
    ensure_exists::<Funding, _>(&state.db, link.funding_id, "Funding").await?;

    let existing = EntityFunding::find()
        .filter(entity_funding::Column::EntityId.eq(link.entity_id))
        .filter(entity_funding::Column::FundingId.eq(link.funding_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Funding is already linked to this entity".to_string(),
        ));
    }

    entity_funding::ActiveModel {
        entity_id: ActiveValue::Set(link.entity_id),
        funding_id: ActiveValue::Set(link.funding_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a funding from an entity", tags("Fundings"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = EntityFunding::delete_many()
        .filter(entity_funding::Column::EntityId.eq(path.owner_id))
        .filter(entity_funding::Column::FundingId.eq(path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new("Funding removed from entity")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/entityfundings").route(web::post().to(link)))
        .service(web::resource("/entityfundings/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/entityfundings/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
