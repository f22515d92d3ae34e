//! Per-language project information handlers.

use crate::{
    entities::{
        prelude::{Project, ProjectInfo, ProjectInfoLink},
        project_info, project_info_link,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        project::{
            NewProjectInfo, ProjectInfoListResponse, ProjectInfoPatch, ProjectInfoPayload,
            ProjectInfoQuery, ProjectInfoResponse,
        },
        to_column,
    },
    services::{
        database::{ensure_exists, find_or_404},
        lookup, validation,
    },
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    TransactionTrait,
};

/// Information rows of the project `{id}`, optionally in one language
#[api_v2_operation(summary = "List project information", tags("Project information"))]
pub async fn list_for_project(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    query: web::Query<ProjectInfoQuery>,
) -> Result<web::Json<ProjectInfoListResponse>, ApiError> {
    ensure_exists::<Project, _>(&state.db, path.id, "Project").await?;
    let language = query.language.map(|language| to_column(&language));

    let project_infos = lookup::project_infos(&state.db, path.id)
        .await?
        .into_iter()
        .filter(|info| language.as_ref().is_none_or(|l| &info.language == l))
        .map(Into::into)
        .collect();
    Ok(web::Json(ProjectInfoListResponse { project_infos }))
}

#[api_v2_operation(summary = "Get project information", tags("Project information"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ProjectInfoResponse>, ApiError> {
    let info = find_or_404::<ProjectInfo, _>(&state.db, path.id, "Project information").await?;
    Ok(web::Json(ProjectInfoResponse {
        project_info: info.into(),
    }))
}

/// Creates the information row and links it to its project
#[api_v2_operation(summary = "Create project information", tags("Project information"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<NewProjectInfo>,
) -> Result<CreatedJson<ProjectInfoResponse>, ApiError> {
    let NewProjectInfo {
        project_id,
        language,
        name,
        title,
        description,
    } = payload.into_inner();
    let name = validation::name(&name, "name")?;
    let title = validation::name(&title, "title")?;
    let language = to_column(&language);

    let txn = state.db.begin().await?;
    ensure_exists::<Project, _>(&txn, project_id, "Project").await?;
    let duplicate = lookup::project_infos(&txn, project_id)
        .await?
        .iter()
        .any(|info| info.language == language);
    if duplicate {
        return Err(ApiError::Conflict(format!(
            "Project already has information in '{language}'"
        )));
    }

    let created = project_info::ActiveModel {
        language: ActiveValue::Set(language),
        name: ActiveValue::Set(name),
        title: ActiveValue::Set(title),
        description: ActiveValue::Set(description),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    project_info_link::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        project_info_id: ActiveValue::Set(created.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(project_id, project_info_id = created.id, "project information created");
    Ok(CreatedJson(ProjectInfoResponse {
        project_info: created.into(),
    }))
}

/// Fails with 409 when another information row of the same project already
/// uses `language`.
async fn ensure_language_free<C: ConnectionTrait>(
    db: &C,
    project_info_id: i32,
    language: &str,
) -> Result<(), ApiError> {
    let link = ProjectInfoLink::find()
        .filter(project_info_link::Column::ProjectInfoId.eq(project_info_id))
        .one(db)
        .await?;
    let Some(link) = link else {
        return Ok(());
    };

    let taken = lookup::project_infos(db, link.project_id)
        .await?
        .iter()
        .any(|info| info.id != project_info_id && info.language == language);
    if taken {
        return Err(ApiError::Conflict(format!(
            "Project already has information in '{language}'"
        )));
    }
    Ok(())
}

#[api_v2_operation(summary = "Replace project information", tags("Project information"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ProjectInfoPayload>,
) -> Result<web::Json<ProjectInfoResponse>, ApiError> {
    let payload = payload.into_inner();
    let language = to_column(&payload.language);
    let name = validation::name(&payload.name, "name")?;
    let title = validation::name(&payload.title, "title")?;

    let txn = state.db.begin().await?;
    let existing = find_or_404::<ProjectInfo, _>(&txn, path.id, "Project information").await?;
    if existing.language != language {
        ensure_language_free(&txn, path.id, &language).await?;
    }
    let mut active: project_info::ActiveModel = existing.into();
    active.language = ActiveValue::Set(language);
    active.name = ActiveValue::Set(name);
    active.title = ActiveValue::Set(title);
    active.description = ActiveValue::Set(payload.description);
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(web::Json(ProjectInfoResponse {
        project_info: updated.into(),
    }))
}

#[api_v2_operation(summary = "Update project information", tags("Project information"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ProjectInfoPatch>,
) -> Result<web::Json<ProjectInfoResponse>, ApiError> {
    let patch = payload.into_inner();
    let name = patch
        .name
        .map(|name| validation::name(&name, "name"))
        .transpose()?;
    let title = patch
        .title
        .map(|title| validation::name(&title, "title"))
        .transpose()?;

    let txn = state.db.begin().await?;
    let existing = find_or_404::<ProjectInfo, _>(&txn, path.id, "Project information").await?;
    let language = patch
        .language
        .map(|language| to_column(&language))
        .filter(|language| *language != existing.language);
    if let Some(language) = &language {
        ensure_language_free(&txn, path.id, language).await?;
    }

    let mut active: project_info::ActiveModel = existing.into();
    if let Some(language) = language {
        active.language = ActiveValue::Set(language);
    }
    if let Some(name) = name {
        active.name = ActiveValue::Set(name);
    }
    if let Some(title) = title {
        active.title = ActiveValue::Set(title);
    }
    if let Some(description) = patch.description {
        active.description = ActiveValue::Set(Some(description));
    }
    let updated = active.update(&txn).await?;
    txn.commit().await?;

    Ok(web::Json(ProjectInfoResponse {
        project_info: updated.into(),
    }))
}

#[api_v2_operation(summary = "Delete project information", tags("Project information"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let txn = state.db.begin().await?;
    ensure_exists::<ProjectInfo, _>(&txn, path.id, "Project information").await?;
    ProjectInfoLink::delete_many()
        .filter(project_info_link::Column::ProjectInfoId.eq(path.id))
        .exec(&txn)
        .await?;
    ProjectInfo::delete_by_id(path.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(web::Json(MessageResponse::new("Project information deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projectinfos/{id}").route(web::get().to(list_for_project)),
    )
    .service(web::resource("/projectinfo").route(web::post().to(create)))
    .service(
        web::resource("/projectinfo/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
