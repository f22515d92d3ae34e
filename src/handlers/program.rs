//! Funding program handlers.

use crate::{
    entities::{
        prelude::{Program, ProgramFunding},
        program, program_funding,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        catalog::{NamePayload, ProgramListResponse, ProgramResponse},
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

#[api_v2_operation(summary = "List programs", tags("Programs"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<ProgramListResponse>, ApiError> {
    let programs = Program::find()
        .order_by_asc(program::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(ProgramListResponse {
        programs: programs.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get program", tags("Programs"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ProgramResponse>, ApiError> {
    let program = find_or_404::<Program, _>(&state.db, path.id, "Program").await?;
    Ok(web::Json(ProgramResponse {
        program: program.into(),
    }))
}

#[api_v2_operation(summary = "Create program", tags("Programs"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<NamePayload>,
) -> Result<CreatedJson<ProgramResponse>, ApiError> {
    let created = program::ActiveModel {
        name: ActiveValue::Set(validation::name(&payload.name, "name")?),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(program_id = created.id, "program created");
    Ok(CreatedJson(ProgramResponse {
        program: created.into(),
    }))
}

#[api_v2_operation(summary = "Update program", tags("Programs"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<NamePayload>,
) -> Result<web::Json<ProgramResponse>, ApiError> {
    let existing = find_or_404::<Program, _>(&state.db, path.id, "Program").await?;
    let mut active: program::ActiveModel = existing.into();
    active.name = ActiveValue::Set(validation::name(&payload.name, "name")?);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(ProgramResponse {
        program: updated.into(),
    }))
}

#[api_v2_operation(summary = "Delete program", tags("Programs"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let txn = state.db.begin().await?;
    ensure_exists::<Program, _>(&txn, path.id, "Program").await?;
    ProgramFunding::delete_many()
        .filter(program_funding::Column::ProgramId.eq(path.id))
        .exec(&txn)
        .await?;
    Program::delete_by_id(path.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(program_id = path.id, "program deleted");
    Ok(web::Json(MessageResponse::new("Program deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/program")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/program/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(update))
            .route(web::delete().to(delete)),
    );
}
