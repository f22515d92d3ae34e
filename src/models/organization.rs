//! Research entity and contact point models.

use crate::entities::{contact_point, contact_point_info, research_entity};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ResearchEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub acronym: String,
    pub address: String,
    pub url: String,
    pub country: String,
}

impl From<research_entity::Model> for ResearchEntity {
    fn from(model: research_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            acronym: model.acronym,
            address: model.address,
            url: model.url,
            country: model.country,
        }
    }
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct EntityPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub acronym: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
pub struct EntityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub acronym: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct EntityResponse {
    pub entity: ResearchEntity,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct EntityListResponse {
    pub entities: Vec<ResearchEntity>,
}

/// A contact point flattened with its person details
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ContactPointView {
    pub id: i32,
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

impl ContactPointView {
    pub fn new(point: contact_point::Model, info: Option<contact_point_info::Model>) -> Self {
        match info {
            Some(info) => Self {
                id: point.id,
                role: point.role,
                name: info.name,
                email: info.email,
                phone: info.phone,
                designation: info.designation,
            },
            None => Self {
                id: point.id,
                role: point.role,
                name: String::new(),
                email: String::new(),
                phone: None,
                designation: None,
            },
        }
    }
}

/// Body of `POST /contactpoint`
#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct NewContactPoint {
    pub entity_id: i32,
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

/// Body of `PUT /contactpoint/{id}`
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct ContactPointPayload {
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
pub struct ContactPointPatch {
    pub role: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointResponse {
    pub contact_point: ContactPointView,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointListResponse {
    pub contact_points: Vec<ContactPointView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointInfo {
    pub id: i32,
    pub contact_point_id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
}

impl From<contact_point_info::Model> for ContactPointInfo {
    fn from(model: contact_point_info::Model) -> Self {
        Self {
            id: model.id,
            contact_point_id: model.contact_point_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            designation: model.designation,
        }
    }
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointInfoResponse {
    pub contact_point_info: ContactPointInfo,
}
