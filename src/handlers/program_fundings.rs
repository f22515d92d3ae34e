//! Program to funding links (`/programsfundings`).

use crate::{
    entities::{
        prelude::{Funding, Program, ProgramFunding},
        program_funding,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, funding::FundingListResponse,
        links::ProgramFundingLink,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

#[api_v2_operation(summary = "List fundings of a program", tags("Fundings"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<FundingListResponse>, ApiError> {
    ensure_exists::<Program, _>(&state.db, path.owner_id, "Program").await?;
    let fundings = lookup::program_fundings(&state.db, path.owner_id).await?;
    Ok(web::Json(FundingListResponse {
        fundings: fundings.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Link a funding to a program", tags("Fundings"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ProgramFundingLink>,
) -> Result<CreatedJson<ProgramFundingLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<Program, _>(&state.db, link.program_id, "Program").await?;
    ensure_exists::<Funding, _>(&state.db, link.funding_id, "Funding").await?;

    let existing = ProgramFunding::find()
        .filter(program_funding::Column::ProgramId.eq(link.program_id))
        .filter(program_funding::Column::FundingId.eq(link.funding_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Funding is already linked to this program".to_string(),
        ));
    }

    program_funding::ActiveModel {
        program_id: ActiveValue::Set(link.program_id),
        funding_id: ActiveValue::Set(link.funding_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a funding from a program", tags("Fundings"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = ProgramFunding::delete_many()
        .filter(program_funding::Column::ProgramId.eq(path.owner_id))
        .filter(program_funding::Column::FundingId.eq(path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new("Funding removed from program")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/programsfundings").route(web::post().to(link)))
        .service(web::resource("/programsfundings/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/programsfundings/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
