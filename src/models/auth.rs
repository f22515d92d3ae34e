//! Authentication-related data models.

use super::user::UserView;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Request model for account creation
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Response model for a created account
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserView,
}

/// Request model for user login
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response model for a successful login
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}
