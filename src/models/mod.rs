//! Request and response models.
//!
//! Handlers never expose sea-orm models directly; every table has a DTO here
//! that controls field naming and what is serialized.

pub mod api;
pub mod audit;
pub mod auth;
pub mod catalog;
pub mod drone;
pub mod funding;
pub mod links;
pub mod organization;
pub mod project;
pub mod role;
pub mod user;

pub use api::*;
pub use audit::*;
pub use auth::*;
pub use role::Role;

use serde::{Serialize, de::DeserializeOwned};

/// Parse a string column holding a serde unit variant (`"in_progress"`, `"pt"`...)
pub(crate) fn from_column<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

/// Render a serde unit variant for storage in a string column
pub(crate) fn to_column<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_round_trip() {
        assert_eq!(to_column(&Role::ProjectCreator), "project_creator");
        assert_eq!(from_column::<Role>("admin"), Some(Role::Admin));
        assert_eq!(from_column::<Role>("nope"), None);
    }
}
