//! Response and path models shared by many endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `/{id}` path segment
#[derive(Debug, Deserialize, Apiv2Schema)]
pub struct IdPath {
    pub id: i32,
}

/// `/{owner_id}` path segment of a link controller (project, entity, program, drone)
#[derive(Debug, Deserialize, Apiv2Schema)]
pub struct OwnerPath {
    pub owner_id: i32,
}

/// `/{owner_id}/{target_id}` path of a single link row
#[derive(Debug, Deserialize, Apiv2Schema)]
pub struct LinkPath {
    pub owner_id: i32,
    pub target_id: i32,
}
