//! Application users and their credentials.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC string
    pub password: String,
    pub contact: Option<String>,
    pub employee_id: Option<String>,
    pub orcid: Option<String>,
    /// One of `admin`, `project_creator`, `user`
    pub role: String,
    pub recover_password_token: Option<String>,
    pub company_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
