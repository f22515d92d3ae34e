//! Research projects.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub status: String,
    pub competitive_financial: bool,
    pub is_national: bool,
    pub is_intern: bool,
    pub url: Option<String>,
    pub doi: Option<String>,
    pub start_date: Option<Date>,
    pub finish_date: Option<Date>,
    pub cost: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
