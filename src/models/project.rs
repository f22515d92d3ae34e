//! Project, project information and membership models.

use super::{
    catalog::{Keyword, ScientificArea, ScientificDomain},
    from_column,
    funding::Funding,
};
use crate::entities::{project, project_info, user_project};
use chrono::NaiveDate;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Intern,
    Funded,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Approved,
    Canceled,
    #[serde(alias = "finishied")]
    Finished,
    Ongoing,
    Closed,
    Renovated,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Pt,
    En,
}

/// Role of a user inside a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Responsible,
    Promotor,
    Copromotor,
    Leader,
    Participant,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub status: ProjectStatus,
    pub competitive_financial: bool,
    pub is_national: bool,
    pub is_intern: bool,
    pub url: Option<String>,
    pub doi: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub cost: f64,
}

impl From<project::Model> for Project {
    fn from(model: project::Model) -> Self {
        Self {
            id: model.id,
            kind: from_column(&model.kind).unwrap_or(ProjectKind::Intern),
            status: from_column(&model.status).unwrap_or(ProjectStatus::Submitting),
            competitive_financial: model.competitive_financial,
            is_national: model.is_national,
            is_intern: model.is_intern,
            url: model.url,
            doi: model.doi,
            start_date: model.start_date,
            finish_date: model.finish_date,
            cost: model.cost,
        }
    }
}

/// Body of `POST /project` and `PUT /project/{id}`
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub status: ProjectStatus,
    pub competitive_financial: bool,
    pub is_national: bool,
    pub is_intern: bool,
    pub url: Option<String>,
    pub doi: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub cost: f64,
}

/// Body of `PATCH /project/{id}`; absent fields keep their value
#[derive(Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(rename = "type")]
    pub kind: Option<ProjectKind>,
    pub status: Option<ProjectStatus>,
    pub competitive_financial: Option<bool>,
    pub is_national: Option<bool>,
    pub is_intern: Option<bool>,
    pub url: Option<String>,
    pub doi: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub cost: Option<f64>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct ProjectResponse {
    pub project: Project,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// A project with everything linked to it
#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailsResponse {
    pub project: Project,
    pub infos: Vec<ProjectInfo>,
    pub keywords: Vec<Keyword>,
    pub scientific_domains: Vec<ScientificDomain>,
    pub scientific_areas: Vec<ScientificArea>,
    pub fundings: Vec<Funding>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct ProjectInfo {
    pub id: i32,
    pub language: Language,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

impl From<project_info::Model> for ProjectInfo {
    fn from(model: project_info::Model) -> Self {
        Self {
            id: model.id,
            language: from_column(&model.language).unwrap_or(Language::Pt),
            name: model.name,
            title: model.title,
            description: model.description,
        }
    }
}

/// Body of `POST /projectinfo`
#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectInfo {
    pub project_id: i32,
    pub language: Language,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

/// Body of `PUT /projectinfo/{id}`
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct ProjectInfoPayload {
    pub language: Language,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
pub struct ProjectInfoPatch {
    pub language: Option<Language>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfoResponse {
    pub project_info: ProjectInfo,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfoListResponse {
    pub project_infos: Vec<ProjectInfo>,
}

#[derive(Deserialize, Apiv2Schema)]
pub struct ProjectInfoQuery {
    pub language: Option<Language>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: i32,
    pub user_id: i32,
    pub project_id: i32,
    pub role: MemberRole,
    pub allocated_time: f64,
}

impl From<user_project::Model> for Membership {
    fn from(model: user_project::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            project_id: model.project_id,
            role: from_column(&model.role).unwrap_or(MemberRole::Participant),
            allocated_time: model.allocated_time,
        }
    }
}

/// A project member with the user's name and email
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub allocated_time: f64,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct NewMembership {
    pub user_id: i32,
    pub project_id: i32,
    pub role: MemberRole,
    #[serde(default)]
    pub allocated_time: f64,
}

#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPatch {
    pub role: Option<MemberRole>,
    pub allocated_time: Option<f64>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct MembershipResponse {
    pub membership: Membership,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct MemberListResponse {
    pub members: Vec<MemberView>,
}
