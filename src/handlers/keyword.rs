//! Keyword handlers.

use crate::{
    entities::{
        keyword,
        prelude::{Keyword, ProjectKeyword},
        project_keyword,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        catalog::{KeywordListResponse, KeywordResponse, NamePayload},
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

#[api_v2_operation(summary = "List keywords", tags("Keywords"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<KeywordListResponse>, ApiError> {
    let keywords = Keyword::find()
        .order_by_asc(keyword::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(KeywordListResponse {
        keywords: keywords.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get keyword", tags("Keywords"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<KeywordResponse>, ApiError> {
    let keyword = find_or_404::<Keyword, _>(&state.db, path.id, "Keyword").await?;
    Ok(web::Json(KeywordResponse {
        keyword: keyword.into(),
    }))
}

#[api_v2_operation(summary = "Create keyword", tags("Keywords"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<NamePayload>,
) -> Result<CreatedJson<KeywordResponse>, ApiError> {
    let created = keyword::ActiveModel {
        name: ActiveValue::Set(validation::name(&payload.name, "name")?),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(keyword_id = created.id, "keyword created");
    Ok(CreatedJson(KeywordResponse {
        keyword: created.into(),
    }))
}

/// Rename a keyword; `PUT` and `PATCH` behave the same
#[api_v2_operation(summary = "Update keyword", tags("Keywords"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<NamePayload>,
) -> Result<web::Json<KeywordResponse>, ApiError> {
    let existing = find_or_404::<Keyword, _>(&state.db, path.id, "Keyword").await?;
    let mut active: keyword::ActiveModel = existing.into();
    active.name = ActiveValue::Set(validation::name(&payload.name, "name")?);
    let updated = active.update(&state.db).await?;

    Ok(web::Json(KeywordResponse {
        keyword: updated.into(),
    }))
}

#[api_v2_operation(summary = "Delete keyword", tags("Keywords"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let txn = state.db.begin().await?;
    ensure_exists::<Keyword, _>(&txn, path.id, "Keyword").await?;
    ProjectKeyword::delete_many()
        .filter(project_keyword::Column::KeywordId.eq(path.id))
        .exec(&txn)
        .await?;
    Keyword::delete_by_id(path.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(keyword_id = path.id, "keyword deleted");
    Ok(web::Json(MessageResponse::new("Keyword deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/keywords")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/keywords/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(update))
            .route(web::delete().to(delete)),
    );
}
