//! Project to keyword links (`/projectkeywords`).

use crate::{
    entities::{
        prelude::{Keyword, Project, ProjectKeyword},
        project_keyword,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        LinkPath, MessageResponse, OwnerPath, catalog::KeywordListResponse,
        links::ProjectKeywordLink,
    },
    services::{database::ensure_exists, lookup},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

#[api_v2_operation(summary = "List keywords of a project", tags("Project links"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<OwnerPath>,
) -> Result<web::Json<KeywordListResponse>, ApiError> {
    ensure_exists::<Project, _>(&state.db, path.owner_id, "Project").await?;
    let keywords = lookup::project_keywords(&state.db, path.owner_id).await?;
    Ok(web::Json(KeywordListResponse {
        keywords: keywords.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Link a keyword to a project", tags("Project links"))]
pub async fn link(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ProjectKeywordLink>,
) -> Result<CreatedJson<ProjectKeywordLink>, ApiError> {
    let link = payload.into_inner();
    ensure_exists::<Project, _>(&state.db, link.project_id, "Project").await?;
    ensure_exists::<Keyword, _>(&state.db, link.keyword_id, "Keyword").await?;

    let existing = ProjectKeyword::find()
        .filter(project_keyword::Column::ProjectId.eq(link.project_id))
        .filter(project_keyword::Column::KeywordId.eq(link.keyword_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "Keyword is already linked to this project".to_string(),
        ));
    }

    project_keyword::ActiveModel {
        project_id: ActiveValue::Set(link.project_id),
        keyword_id: ActiveValue::Set(link.keyword_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(CreatedJson(link))
}

#[api_v2_operation(summary = "Unlink a keyword from a project", tags("Project links"))]
pub async fn unlink(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<LinkPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = ProjectKeyword::delete_many()
        .filter(project_keyword::Column::ProjectId.eq(path.owner_id))
        .filter(project_keyword::Column::KeywordId.eq(path.target_id))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Link"));
    }
    Ok(web::Json(MessageResponse::new("Keyword removed from project")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projectkeywords").route(web::post().to(link)))
        .service(web::resource("/projectkeywords/{owner_id}").route(web::get().to(list)))
        .service(
            web::resource("/projectkeywords/{owner_id}/{target_id}")
                .route(web::delete().to(unlink)),
        );
}
