//! Company handlers (`/company`).

use crate::{
    entities::{
        company, drone_part,
        prelude::{Company, DronePart, User},
        user,
    },
    error::ApiError,
    middleware::{Admins, Authorized, Members},
    models::{
        IdPath, MessageResponse,
        catalog::NamePayload,
        drone::{CompanyListResponse, CompanyResponse},
    },
    services::{database::find_or_404, validation},
    state::AppState,
};
use paperclip::actix::{CreatedJson, api_v2_operation, web};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

#[api_v2_operation(summary = "List companies", tags("Companies"))]
pub async fn list(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
) -> Result<web::Json<CompanyListResponse>, ApiError> {
    let companies = Company::find()
        .order_by_asc(company::Column::Id)
        .all(&state.db)
        .await?;
    Ok(web::Json(CompanyListResponse {
        companies: companies.into_iter().map(Into::into).collect(),
    }))
}

#[api_v2_operation(summary = "Get company", tags("Companies"))]
pub async fn get(
    _caller: Authorized<Members>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<CompanyResponse>, ApiError> {
    let company = find_or_404::<Company, _>(&state.db, path.id, "Company").await?;
    Ok(web::Json(CompanyResponse {
        company: company.into(),
    }))
}

#[api_v2_operation(summary = "Create company", tags("Companies"))]
pub async fn create(
    _caller: Authorized<Admins>,
    state: web::Data<AppState>,
    payload: web::Json<NamePayload>,
) -> Result<CreatedJson<CompanyResponse>, ApiError> {
    let created = company::ActiveModel {
        name: ActiveValue::Set(validation::name(&payload.name, "name")?),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(company_id = created.id, "company created");
    Ok(CreatedJson(CompanyResponse {
        company: created.into(),
    }))
}

/// Rename a company; `PUT` and `PATCH` both land here
#[api_v2_operation(summary = "Update company", tags("Companies"))]
pub async fn update(
    _caller: Authorized<Admins>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
    payload: web::Json<NamePayload>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let name = validation::name(&payload.name, "name")?;
    let existing = find_or_404::<Company, _>(&state.db, path.id, "Company").await?;
    let mut active: company::ActiveModel = existing.into();
    active.name = ActiveValue::Set(name);
    active.update(&state.db).await?;

    Ok(web::Json(MessageResponse::new("Company updated")))
}

/// Delete a company that no user or drone part refers to any more
#[api_v2_operation(summary = "Delete company", tags("Companies"))]
pub async fn delete(
    _caller: Authorized<Admins>,
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<web::Json<MessageResponse>, ApiError> {
    let id = path.id;
    find_or_404::<Company, _>(&state.db, id, "Company").await?;

    let members = User::find()
        .filter(user::Column::CompanyId.eq(id))
        .count(&state.db)
        .await?;
    let parts = DronePart::find()
        .filter(drone_part::Column::CompanyId.eq(id))
        .count(&state.db)
        .await?;
    if members > 0 || parts > 0 {
        return Err(ApiError::Conflict(
            "Company still has users or drone parts".to_string(),
        ));
    }

    Company::delete_by_id(id).exec(&state.db).await?;
    tracing::info!(company_id = id, "company deleted");
    Ok(web::Json(MessageResponse::new("Company deleted")))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/company")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(web::resource("/company/all").route(web::get().to(list)))
    .service(
        web::resource("/company/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::patch().to(update))
            .route(web::delete().to(delete)),
    );
}
