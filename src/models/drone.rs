//! Company, drone and drone part models.

use crate::entities::{company, drone, drone_part};
use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Company {
    pub id: i32,
    pub name: String,
}

impl From<company::Model> for Company {
    fn from(model: company::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct DronePart {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub company_id: i32,
}

impl From<drone_part::Model> for DronePart {
    fn from(model: drone_part::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            company_id: model.company_id,
        }
    }
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct DronePartPayload {
    pub name: String,
    pub quantity: i32,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
pub struct DronePartPatch {
    pub name: Option<String>,
    pub quantity: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct Drone {
    pub id: i32,
    pub user_id: i32,
    pub finish: bool,
    pub created_at: DateTime<Utc>,
}

impl From<drone::Model> for Drone {
    fn from(model: drone::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            finish: model.finish,
            created_at: model.created_at,
        }
    }
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct NewDrone {
    #[serde(default)]
    pub finish: bool,
    #[serde(default)]
    pub part_ids: Vec<i32>,
}

/// Body of `PUT`/`PATCH /drone/{id}`
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct DroneUpdate {
    pub finish: bool,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct DroneResponse {
    pub drone: Drone,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct DroneListResponse {
    pub drones: Vec<Drone>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct DroneDetailsResponse {
    pub drone: Drone,
    pub parts: Vec<DronePart>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct DronePartListResponse {
    pub parts: Vec<DronePart>,
}
