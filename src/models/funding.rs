//! Funding models.

use crate::entities::funding;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct Funding {
    pub id: i32,
    pub is_intern: bool,
    pub value: f64,
}

impl From<funding::Model> for Funding {
    fn from(model: funding::Model) -> Self {
        Self {
            id: model.id,
            is_intern: model.is_intern,
            value: model.value,
        }
    }
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct FundingPayload {
    pub is_intern: bool,
    pub value: f64,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct FundingPatch {
    pub is_intern: Option<bool>,
    pub value: Option<f64>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct FundingResponse {
    pub funding: Funding,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct FundingListResponse {
    pub fundings: Vec<Funding>,
}
