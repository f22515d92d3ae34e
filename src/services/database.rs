//! Connection, schema bootstrap and shared lookups.

use crate::{
    config::{AuthConfig, DatabaseConfig},
    entities::{prelude::*, user},
    error::{ApiError, StartupError},
    models::{Role, to_column},
    services::auth::hash_password,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, Database, DatabaseConnection,
    EntityTrait, PrimaryKeyTrait, QueryFilter, Schema,
};

/// Open the connection pool described by `config`
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = Database::connect(config.connect_options()).await?;
    tracing::info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), sea_orm::DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Create every table that does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    create_table(db, User).await?;
    create_table(db, Company).await?;
    create_table(db, Project).await?;
    create_table(db, UserProject).await?;
    create_table(db, ProjectInfo).await?;
    create_table(db, ProjectInfoLink).await?;
    create_table(db, Keyword).await?;
    create_table(db, ProjectKeyword).await?;
    create_table(db, ScientificDomain).await?;
    create_table(db, ProjectScientificDomain).await?;
    create_table(db, ScientificArea).await?;
    create_table(db, ProjectScientificArea).await?;
    create_table(db, Funding).await?;
    create_table(db, ProjectFunding).await?;
    create_table(db, ResearchEntity).await?;
    create_table(db, ContactPoint).await?;
    create_table(db, ContactPointInfo).await?;
    create_table(db, EntityContactPoint).await?;
    create_table(db, EntityFunding).await?;
    create_table(db, Program).await?;
    create_table(db, ProgramFunding).await?;
    create_table(db, DronePart).await?;
    create_table(db, Drone).await?;
    create_table(db, DroneHasPart).await?;
    tracing::info!("database schema ready");
    Ok(())
}

/// Create the configured administrator unless an admin already exists.
///
/// An existing account with the configured email is promoted instead.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &AuthConfig) -> Result<(), StartupError> {
    let Some(admin) = &config.bootstrap_admin else {
        return Ok(());
    };

    let admin_role = to_column(&Role::Admin);
    let existing_admin = User::find()
        .filter(user::Column::Role.eq(admin_role.clone()))
        .one(db)
        .await?;
    if existing_admin.is_some() {
        tracing::debug!("an administrator already exists, skipping bootstrap");
        return Ok(());
    }

    let email = admin.email.trim().to_lowercase();
    if let Some(found) = User::find()
        .filter(user::Column::Email.eq(email.clone()))
        .one(db)
        .await?
    {
        let mut active: user::ActiveModel = found.into();
        active.role = ActiveValue::Set(admin_role);
        active.update(db).await?;
        tracing::info!(email = %email, "promoted existing user to administrator");
        return Ok(());
    }

    let password = hash_password(&admin.password)
        .map_err(|e| StartupError::Config(format!("cannot hash ADMIN_PASSWORD: {e}")))?;
    user::ActiveModel {
        name: ActiveValue::Set(local_part(&email).to_string()),
        email: ActiveValue::Set(email.clone()),
        password: ActiveValue::Set(password),
        role: ActiveValue::Set(admin_role),
        ..Default::default()
    }
    .insert(db)
    .await?;
    tracing::info!(email = %email, "created bootstrap administrator");
    Ok(())
}

/// The part of an email address before `@`
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Fetch a row by its integer id, mapping absence to 404 `"<what> not found"`
pub async fn find_or_404<E, C>(db: &C, id: i32, what: &str) -> Result<E::Model, ApiError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(what))
}

/// Fail with 404 unless the row exists
pub async fn ensure_exists<E, C>(db: &C, id: i32, what: &str) -> Result<(), ApiError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    find_or_404::<E, C>(db, id, what).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminBootstrap;

    #[test]
    fn test_local_part() {
        assert_eq!(local_part("ana.silva@uni.pt"), "ana.silva");
        assert_eq!(local_part("nodomain"), "nodomain");
    }

    #[actix_web::test]
    async fn test_bootstrap_admin_runs_once() {
        let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
        ensure_schema(&db).await.unwrap();
        // Running the bootstrap twice must be harmless
        ensure_schema(&db).await.unwrap();

        let config = AuthConfig {
            bootstrap_admin: Some(AdminBootstrap {
                email: "Root@Example.com".to_string(),
                password: "super-secret".to_string(),
            }),
            ..AuthConfig::default()
        };
        bootstrap_admin(&db, &config).await.unwrap();
        bootstrap_admin(&db, &config).await.unwrap();

        let users = User::find().all(&db).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "root@example.com");
        assert_eq!(users[0].role, "admin");
        assert_eq!(users[0].name, "root");
    }
}
