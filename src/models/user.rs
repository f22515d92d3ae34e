//! User account models.

use super::role::Role;
use crate::entities::user;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// A user as returned by the API; the password hash never leaves the server
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub contact: Option<String>,
    pub employee_id: Option<String>,
    pub orcid: Option<String>,
    pub role: Role,
    pub company_id: Option<i32>,
}

impl From<user::Model> for UserView {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            // Unknown roles in storage degrade to the least privileged one
            role: model.role.parse().unwrap_or(Role::User),
            name: model.name,
            email: model.email,
            contact: model.contact,
            employee_id: model.employee_id,
            orcid: model.orcid,
            company_id: model.company_id,
        }
    }
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct UserResponse {
    pub user: UserView,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct UserListResponse {
    pub users: Vec<UserView>,
}

/// Full replacement of the editable profile fields
#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub contact: Option<String>,
    pub employee_id: Option<String>,
    pub orcid: Option<String>,
}

/// Partial update; `role` and `companyId` are reserved to administrators
#[derive(Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub employee_id: Option<String>,
    pub orcid: Option<String>,
    pub role: Option<Role>,
    pub company_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
