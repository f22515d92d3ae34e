//! Parts mounted on a drone.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drone_has_parts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub drone_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub part_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
