//! Named reference data: keywords, scientific domains and areas, programs.

use crate::entities::{keyword, program, scientific_area, scientific_domain};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Keyword {
    pub id: i32,
    pub name: String,
}

impl From<keyword::Model> for Keyword {
    fn from(model: keyword::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ScientificDomain {
    pub id: i32,
    pub name: String,
}

impl From<scientific_domain::Model> for ScientificDomain {
    fn from(model: scientific_domain::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificArea {
    pub id: i32,
    pub name: String,
    pub scientific_domain_id: i32,
}

impl From<scientific_area::Model> for ScientificArea {
    fn from(model: scientific_area::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            scientific_domain_id: model.scientific_domain_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Program {
    pub id: i32,
    pub name: String,
}

impl From<program::Model> for Program {
    fn from(model: program::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// `{ "name": ... }` body used by every named resource
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct NamePayload {
    pub name: String,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificAreaPayload {
    pub name: String,
    pub scientific_domain_id: i32,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificAreaPatch {
    pub name: Option<String>,
    pub scientific_domain_id: Option<i32>,
}

#[derive(Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificAreaQuery {
    pub domain_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct KeywordResponse {
    pub keyword: Keyword,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct KeywordListResponse {
    pub keywords: Vec<Keyword>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificDomainResponse {
    pub scientific_domain: ScientificDomain,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificDomainListResponse {
    pub scientific_domains: Vec<ScientificDomain>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificAreaResponse {
    pub scientific_area: ScientificArea,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ScientificAreaListResponse {
    pub scientific_areas: Vec<ScientificArea>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct ProgramResponse {
    pub program: Program,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct ProgramListResponse {
    pub programs: Vec<Program>,
}
