//! Project handlers.

use crate::{
    entities::{
        prelude::*, project, project_funding, project_info, project_info_link, project_keyword,
        project_scientific_area, project_scientific_domain, user_project,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        project::{
            ProjectDetailsResponse, ProjectListResponse, ProjectPatch, ProjectPayload,
            ProjectResponse,
        },
        to_column,
    },
    services::{database::find_or_404, lookup, validation},
    state::AppState,
};
use chrono::NaiveDate;
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

fn validate(start: Option<NaiveDate>, finish: Option<NaiveDate>, cost: f64) -> Result<(), ApiError> {
    validation::date_range(start, finish)?;
    validation::non_negative(cost, "cost")
}

fn apply(model: &mut project::ActiveModel, payload: ProjectPayload) {
    model.kind = ActiveValue::Set(to_column(&payload.kind));
    model.status = ActiveValue::Set(to_column(&payload.status));
    model.competitive_financial = ActiveValue::Set(payload.competitive_financial);
    model.is_national = ActiveValue::Set(payload.is_national);
    model.is_intern = ActiveValue::Set(payload.is_intern);
    model.url = ActiveValue::Set(payload.url);
    model.doi = ActiveValue::Set(payload.doi);
    model.start_date = ActiveValue::Set(payload.start_date);
    model.finish_date = ActiveValue::Set(payload.finish_date);
    model.cost = ActiveValue::Set(payload.cost);
}

#[api_v2_operation(summary = "List projects", tags("Projects"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<ProjectListResponse>, ApiError> {
    let projects = Project::find()
        .order_by_asc(project::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(ProjectListResponse {
        projects: projects.into_iter().map(Into::into).collect(),
    }))
}

/// A project with its information rows, keywords, domains, areas and fundings
#[api_v2_operation(summary = "Get project", tags("Projects"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<ProjectDetailsResponse>, ApiError> {
    let db = &state.db;
    let project = find_or_404::<Project, _>(db, path.id, "Project").await?;

    Ok(web::Json(ProjectDetailsResponse {
        infos: into_all(lookup::project_infos(db, project.id).await?),
        keywords: into_all(lookup::project_keywords(db, project.id).await?),
        scientific_domains: into_all(lookup::project_scientific_domains(db, project.id).await?),
        scientific_areas: into_all(lookup::project_scientific_areas(db, project.id).await?),
        fundings: into_all(lookup::project_fundings(db, project.id).await?),
        project: project.into(),
    }))
}

fn into_all<M, T: From<M>>(models: Vec<M>) -> Vec<T> {
    models.into_iter().map(T::from).collect()
}

#[api_v2_operation(summary = "Create project", tags("Projects"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<ProjectPayload>,
) -> Result<CreatedJson<ProjectResponse>, ApiError> {
    let payload = payload.into_inner();
    validate(payload.start_date, payload.finish_date, payload.cost)?;
    let mut model = <project::ActiveModel as Default>::default();
    apply(&mut model, payload);
    let created = model.insert(&state.db).await?;

    tracing::info!(project_id = created.id, "project created");
    Ok(CreatedJson(ProjectResponse {
        project: created.into(),
    }))
}

#[api_v2_operation(summary = "Replace project", tags("Projects"))]
pub async fn update(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ProjectPayload>,
) -> Result<web::Json<ProjectResponse>, ApiError> {
    let existing = find_or_404::<Project, _>(&state.db, path.id, "Project").await?;
    let payload = payload.into_inner();
    validate(payload.start_date, payload.finish_date, payload.cost)?;
    let mut model: project::ActiveModel = existing.into();
    apply(&mut model, payload);
    let updated = model.update(&state.db).await?;

    tracing::info!(project_id = updated.id, "project replaced");
    Ok(web::Json(ProjectResponse {
        project: updated.into(),
    }))
}

#[api_v2_operation(summary = "Update project", tags("Projects"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ProjectPatch>,
) -> Result<web::Json<ProjectResponse>, ApiError> {
    let existing = find_or_404::<Project, _>(&state.db, path.id, "Project").await?;
    let patch = payload.into_inner();
    validate(
        patch.start_date.or(existing.start_date),
        patch.finish_date.or(existing.finish_date),
        patch.cost.unwrap_or(existing.cost),
    )?;
    let mut model: project::ActiveModel = existing.into();

    if let Some(kind) = patch.kind {
        model.kind = ActiveValue::Set(to_column(&kind));
    }
    if let Some(status) = patch.status {
        model.status = ActiveValue::Set(to_column(&status));
    }
    if let Some(value) = patch.competitive_financial {
        model.competitive_financial = ActiveValue::Set(value);
    }
    if let Some(value) = patch.is_national {
        model.is_national = ActiveValue::Set(value);
    }
    if let Some(value) = patch.is_intern {
        model.is_intern = ActiveValue::Set(value);
    }
    if let Some(url) = patch.url {
        model.url = ActiveValue::Set(Some(url));
    }
    if let Some(doi) = patch.doi {
        model.doi = ActiveValue::Set(Some(doi));
    }
    if let Some(date) = patch.start_date {
        model.start_date = ActiveValue::Set(Some(date));
    }
    if let Some(date) = patch.finish_date {
        model.finish_date = ActiveValue::Set(Some(date));
    }
    if let Some(cost) = patch.cost {
        model.cost = ActiveValue::Set(cost);
    }
    let updated = model.update(&state.db).await?;

    tracing::info!(project_id = updated.id, "project updated");
    Ok(web::Json(ProjectResponse {
        project: updated.into(),
    }))
}

/// Deletes the project and everything linked to it in one transaction
#[api_v2_operation(summary = "Delete project", tags("Projects"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let id = path.id;
    let txn = state.db.begin().await?;
    find_or_404::<Project, _>(&txn, id, "Project").await?;

    let info_ids: Vec<i32> = ProjectInfoLink::find()
        .filter(project_info_link::Column::ProjectId.eq(id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|link| link.project_info_id)
        .collect();
    ProjectInfoLink::delete_many()
        .filter(project_info_link::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    ProjectInfo::delete_many()
        .filter(project_info::Column::Id.is_in(info_ids))
        .exec(&txn)
        .await?;
    ProjectKeyword::delete_many()
        .filter(project_keyword::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    ProjectScientificDomain::delete_many()
        .filter(project_scientific_domain::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    ProjectScientificArea::delete_many()
        .filter(project_scientific_area::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    ProjectFunding::delete_many()
        .filter(project_funding::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    UserProject::delete_many()
        .filter(user_project::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    Project::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(project_id = id, "project deleted");
    Ok(web::Json(MessageResponse::new("Project deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/project")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/project/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(patch))
            .route(web::delete().to(delete)),
    );
}
