//! Project membership handlers.

use crate::{
    entities::{
        prelude::{Project, User, UserProject},
        user, user_project,
    },
    error::ApiError,
    middleware::{Authorized, Creators, Members},
    models::{
        IdPath, MessageResponse,
        project::{
            MemberListResponse, MemberRole, MemberView, Membership, MembershipPatch,
            MembershipResponse, NewMembership,
        },
        from_column, to_column,
    },
    services::{
        database::{ensure_exists, find_or_404},
        validation,
    },
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// Members of the project `{id}`, with name and email
#[api_v2_operation(summary = "List project members", tags("Project members"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MemberListResponse>, ApiError> {
    let project_id = path.id;
    ensure_exists::<Project, _>(&state.db, project_id, "Project").await?;

    let memberships = UserProject::find()
        .filter(user_project::Column::ProjectId.eq(project_id))
        .order_by_asc(user_project::Column::Id)
        .all(&state.db)
        .await?;
    let user_ids: Vec<i32> = memberships.iter().map(|m| m.user_id).collect();
    let users = User::find()
        .filter(user::Column::Id.is_in(user_ids))
        .all(&state.db)
        .await?;

    let members = memberships
        .into_iter()
        .filter_map(|membership| {
            let user = users.iter().find(|u| u.id == membership.user_id)?;
            Some(MemberView {
                id: membership.id,
                user_id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                role: from_column(&membership.role).unwrap_or(MemberRole::Participant),
                allocated_time: membership.allocated_time,
            })
        })
        .collect();
    Ok(web::Json(MemberListResponse { members }))
}

#[api_v2_operation(summary = "Add project member", tags("Project members"))]
pub async fn create(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    payload: web::Json<NewMembership>,
) -> Result<CreatedJson<MembershipResponse>, ApiError> {
    let NewMembership {
        user_id,
        project_id,
        role,
        allocated_time,
    } = payload.into_inner();
    validation::non_negative(allocated_time, "allocatedTime")?;
    ensure_exists::<User, _>(&state.db, user_id, "User").await?;
    ensure_exists::<Project, _>(&state.db, project_id, "Project").await?;

    let existing = UserProject::find()
        .filter(user_project::Column::UserId.eq(user_id))
        .filter(user_project::Column::ProjectId.eq(project_id))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict(
            "User is already a member of this project".to_string(),
        ));
    }

    let created = user_project::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        project_id: ActiveValue::Set(project_id),
        role: ActiveValue::Set(to_column(&role)),
        allocated_time: ActiveValue::Set(allocated_time),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(user_id, project_id, "project member added");
    Ok(CreatedJson(MembershipResponse {
        membership: Membership::from(created),
    }))
}

#[api_v2_operation(summary = "Update project member", tags("Project members"))]
pub async fn patch(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<MembershipPatch>,
) -> Result<web::Json<MembershipResponse>, ApiError> {
    let existing = find_or_404::<UserProject, _>(&state.db, path.id, "Membership").await?;
    let patch = payload.into_inner();
    let mut active: user_project::ActiveModel = existing.into();

    if let Some(role) = patch.role {
        active.role = ActiveValue::Set(to_column(&role));
    }
    if let Some(allocated_time) = patch.allocated_time {
        validation::non_negative(allocated_time, "allocatedTime")?;
        active.allocated_time = ActiveValue::Set(allocated_time);
    }
    let updated = active.update(&state.db).await?;

    Ok(web::Json(MembershipResponse {
        membership: updated.into(),
    }))
}

#[api_v2_operation(summary = "Remove project member", tags("Project members"))]
pub async fn delete(
    _caller: Authorized<Creators>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let result = UserProject::delete_by_id(path.id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::not_found("Membership"));
    }
    tracing::info!(membership_id = path.id, "project member removed");
    Ok(web::Json(MessageResponse::new("Membership deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/userprojects").route(web::post().to(create)))
        .service(
            web::resource("/userprojects/{id}")
                .route(web::get().to(list))
                .route(web::patch().to(patch))
                .route(web::delete().to(delete)),
        );
}
