//! Bodies of the link controllers' `POST` requests.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKeywordLink {
    pub project_id: i32,
    pub keyword_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScientificDomainLink {
    pub project_id: i32,
    pub scientific_domain_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScientificAreaLink {
    pub project_id: i32,
    pub scientific_area_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFundingLink {
    pub project_id: i32,
    pub funding_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct EntityContactPointLink {
    pub entity_id: i32,
    pub contact_point_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct EntityFundingLink {
    pub entity_id: i32,
    pub funding_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramFundingLink {
    pub program_id: i32,
    pub funding_id: i32,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct DronePartLink {
    pub drone_id: i32,
    pub part_id: i32,
}
