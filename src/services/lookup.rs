//! Reads that follow link tables.

use crate::entities::{
    contact_point, contact_point_info, drone_has_part, drone_part, entity_contact_point,
    entity_funding, funding, keyword, prelude::*, program_funding, project_funding,
    project_info, project_info_link, project_keyword, project_scientific_area,
    project_scientific_domain, scientific_area, scientific_domain,
};
use crate::models::organization::ContactPointView;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub async fn project_infos<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
) -> Result<Vec<project_info::Model>, DbErr> {
    let ids: Vec<i32> = ProjectInfoLink::find()
        .filter(project_info_link::Column::ProjectId.eq(project_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.project_info_id)
        .collect();
    ProjectInfo::find()
        .filter(project_info::Column::Id.is_in(ids))
        .order_by_asc(project_info::Column::Id)
        .all(db)
        .await
}

pub async fn project_keywords<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
) -> Result<Vec<keyword::Model>, DbErr> {
    let ids: Vec<i32> = ProjectKeyword::find()
        .filter(project_keyword::Column::ProjectId.eq(project_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.keyword_id)
        .collect();
    Keyword::find()
        .filter(keyword::Column::Id.is_in(ids))
        .order_by_asc(keyword::Column::Id)
        .all(db)
        .await
}

pub async fn project_scientific_domains<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
) -> Result<Vec<scientific_domain::Model>, DbErr> {
    let ids: Vec<i32> = ProjectScientificDomain::find()
        .filter(project_scientific_domain::Column::ProjectId.eq(project_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.scientific_domain_id)
        .collect();
    ScientificDomain::find()
        .filter(scientific_domain::Column::Id.is_in(ids))
        .order_by_asc(scientific_domain::Column::Id)
        .all(db)
        .await
}

pub async fn project_scientific_areas<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
) -> Result<Vec<scientific_area::Model>, DbErr> {
    let ids: Vec<i32> = ProjectScientificArea::find()
        .filter(project_scientific_area::Column::ProjectId.eq(project_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.scientific_area_id)
        .collect();
    ScientificArea::find()
        .filter(scientific_area::Column::Id.is_in(ids))
        .order_by_asc(scientific_area::Column::Id)
        .all(db)
        .await
}

pub async fn project_fundings<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
) -> Result<Vec<funding::Model>, DbErr> {
    let ids: Vec<i32> = ProjectFunding::find()
        .filter(project_funding::Column::ProjectId.eq(project_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.funding_id)
        .collect();
    fundings_by_id(db, ids).await
}

pub async fn entity_fundings<C: ConnectionTrait>(
    db: &C,
    entity_id: i32,
) -> Result<Vec<funding::Model>, DbErr> {
    let ids: Vec<i32> = EntityFunding::find()
        .filter(entity_funding::Column::EntityId.eq(entity_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.funding_id)
        .collect();
    fundings_by_id(db, ids).await
}

pub async fn program_fundings<C: ConnectionTrait>(
    db: &C,
    program_id: i32,
) -> Result<Vec<funding::Model>, DbErr> {
    let ids: Vec<i32> = ProgramFunding::find()
        .filter(program_funding::Column::ProgramId.eq(program_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.funding_id)
        .collect();
    fundings_by_id(db, ids).await
}

async fn fundings_by_id<C: ConnectionTrait>(
    db: &C,
    ids: Vec<i32>,
) -> Result<Vec<funding::Model>, DbErr> {
    Funding::find()
        .filter(funding::Column::Id.is_in(ids))
        .order_by_asc(funding::Column::Id)
        .all(db)
        .await
}

/// Contact points of an entity, flattened with their person details
pub async fn entity_contact_points<C: ConnectionTrait>(
    db: &C,
    entity_id: i32,
) -> Result<Vec<ContactPointView>, DbErr> {
    let ids: Vec<i32> = EntityContactPoint::find()
        .filter(entity_contact_point::Column::EntityId.eq(entity_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.contact_point_id)
        .collect();
    let points = ContactPoint::find()
        .filter(contact_point::Column::Id.is_in(ids.clone()))
        .order_by_asc(contact_point::Column::Id)
        .all(db)
        .await?;
    let mut infos = ContactPointInfo::find()
        .filter(contact_point_info::Column::ContactPointId.is_in(ids))
        .all(db)
        .await?;

    Ok(points
        .into_iter()
        .map(|point| {
            let info = infos
                .iter()
                .position(|info| info.contact_point_id == point.id)
                .map(|index| infos.swap_remove(index));
            ContactPointView::new(point, info)
        })
        .collect())
}

pub async fn contact_point_view<C: ConnectionTrait>(
    db: &C,
    point: contact_point::Model,
) -> Result<ContactPointView, DbErr> {
    let info = ContactPointInfo::find()
        .filter(contact_point_info::Column::ContactPointId.eq(point.id))
        .one(db)
        .await?;
    Ok(ContactPointView::new(point, info))
}

pub async fn drone_parts<C: ConnectionTrait>(
    db: &C,
    drone_id: i32,
) -> Result<Vec<drone_part::Model>, DbErr> {
    let ids: Vec<i32> = DroneHasPart::find()
        .filter(drone_has_part::Column::DroneId.eq(drone_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.part_id)
        .collect();
    DronePart::find()
        .filter(drone_part::Column::Id.is_in(ids))
        .order_by_asc(drone_part::Column::Id)
        .all(db)
        .await
}
