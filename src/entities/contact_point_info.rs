//! Person details behind a contact point.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_point_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contact_point_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
