//! Localized name, title and description of a project.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `pt` or `en`
    pub language: String,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
