//! User account handlers.

use crate::{
    entities::{
        prelude::{Company, User, UserProject},
        user, user_project,
    },
    error::ApiError,
    middleware::{Admins, Authorized, Members},
    models::{
        IdPath, MessageResponse, to_column,
        user::{
            ChangePasswordRequest, PatchUserRequest, UpdateUserRequest, UserListResponse,
            UserResponse,
        },
    },
    services::{
        database::{ensure_exists, find_or_404},
        hash_password, validation, verify_password,
    },
    state::AppState,
};
use actix_web::web::block;
use paperclip::actix::{api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

async fn load_for(
    state: &AppState,
    caller: &Authorized<Members>,
    id: i32,
) -> Result<user::Model, ApiError> {
    if !caller.is_self_or_admin(id) {
        return Err(ApiError::forbidden());
    }
    find_or_404::<User, _>(&state.db, id, "User").await
}

#[api_v2_operation(summary = "List users", tags("Users"))]
pub async fn list(
    _caller: Authorized<Admins>,
    state: web::Data<AppState>,
) -> Result<web::Json<UserListResponse>, ApiError> {
    let users = User::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(UserListResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Current user", tags("Users"))]
pub async fn me(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<UserResponse>, ApiError> {
    let user = find_or_404::<User, _>(&state.db, caller.user_id(), "User").await?;
    Ok(web::Json(UserResponse { user: user.into() }))
}

#[api_v2_operation(summary = "Get user", tags("Users"))]
pub async fn get(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<UserResponse>, ApiError> {
    let user = load_for(&state, &caller, path.id).await?;
    Ok(web::Json(UserResponse { user: user.into() }))
}

#[api_v2_operation(summary = "Replace profile", tags("Users"))]
pub async fn update(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<web::Json<UserResponse>, ApiError> {
    let existing = load_for(&state, &caller, path.id).await?;
    let UpdateUserRequest {
        name,
        contact,
        employee_id,
        orcid,
    } = payload.into_inner();

    let mut active: user::ActiveModel = existing.into();
    active.name = ActiveValue::Set(validation::name(&name, "name")?);
    active.contact = ActiveValue::Set(contact);
    active.employee_id = ActiveValue::Set(employee_id);
    active.orcid = ActiveValue::Set(orcid);
    let updated = active.update(&state.db).await?;

    tracing::info!(user_id = updated.id, "user profile replaced");
    Ok(web::Json(UserResponse {
        user: updated.into(),
    }))
}

/// Partial profile update
///
/// `role` and `companyId` can only be changed by an administrator.
#[api_v2_operation(summary = "Update profile", tags("Users"))]
pub async fn patch(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<PatchUserRequest>,
) -> Result<web::Json<UserResponse>, ApiError> {
    let existing = load_for(&state, &caller, path.id).await?;
    let patch = payload.into_inner();

    if (patch.role.is_some() || patch.company_id.is_some()) && !caller.is_admin() {
        return Err(ApiError::forbidden());
    }

    let mut active: user::ActiveModel = existing.into();
    if let Some(name) = patch.name {
        active.name = ActiveValue::Set(validation::name(&name, "name")?);
    }
    if let Some(contact) = patch.contact {
        active.contact = ActiveValue::Set(Some(contact));
    }
    if let Some(employee_id) = patch.employee_id {
        active.employee_id = ActiveValue::Set(Some(employee_id));
    }
    if let Some(orcid) = patch.orcid {
        active.orcid = ActiveValue::Set(Some(orcid));
    }
    if let Some(role) = patch.role {
        active.role = ActiveValue::Set(to_column(&role));
    }
    if let Some(company_id) = patch.company_id {
        ensure_exists::<Company, _>(&state.db, company_id, "Company").await?;
        active.company_id = ActiveValue::Set(Some(company_id));
    }
    let updated = active.update(&state.db).await?;

    tracing::info!(user_id = updated.id, "user profile updated");
    Ok(web::Json(UserResponse {
        user: updated.into(),
    }))
}

#[api_v2_operation(summary = "Change password", tags("Users"))]
pub async fn change_password(
    caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    if caller.user_id() != path.id {
        return Err(ApiError::forbidden());
    }
    let existing = find_or_404::<User, _>(&state.db, path.id, "User").await?;
    let ChangePasswordRequest {
        current_password,
        new_password,
    } = payload.into_inner();
    validation::password(&new_password)?;

    let stored = existing.password.clone();
    let matches = block(move || verify_password(&current_password, &stored))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !matches {
        return Err(ApiError::Unauthorized(
            "Current password is incorrect.".to_string(),
        ));
    }

    let hash = block(move || hash_password(&new_password))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let mut active: user::ActiveModel = existing.into();
    active.password = ActiveValue::Set(hash);
    active.update(&state.db).await?;

    tracing::info!(user_id = path.id, "password changed");
    Ok(web::Json(MessageResponse::new("Password updated")))
}

#[api_v2_operation(summary = "Delete user", tags("Users"))]
pub async fn delete(
    _caller: Authorized<Admins>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let id = path.id;
    let txn = state.db.begin().await?;
    ensure_exists::<User, _>(&txn, id, "User").await?;
    UserProject::delete_many()
        .filter(user_project::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    User::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(web::Json(MessageResponse::new("User deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/user").route(web::get().to(list)))
        .service(web::resource("/user/me").route(web::get().to(me)))
        .service(
            web::resource("/user/{id}/password").route(web::put().to(change_password)),
        )
        .service(
            web::resource("/user/{id}")
                .route(web::get().to(get))
                .route(web::put().to(update))
                .route(web::patch().to(patch))
                .route(web::delete().to(delete)),
        );
}
