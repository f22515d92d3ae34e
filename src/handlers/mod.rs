//! HTTP request handlers, one module per controller.
//!
//! Each controller module exposes a `configure` function that mounts its
//! resources; [`crate::routes`] decides which ones a process serves.

pub mod auth;
pub mod company;
pub mod contact_point;
pub mod drone;
pub mod drone_has_parts;
pub mod drone_parts;
pub mod entity_contact_points;
pub mod entity_fundings;
pub mod funding;
pub mod health;
pub mod keyword;
pub mod openapi;
pub mod probe;
pub mod program;
pub mod program_fundings;
pub mod project;
pub mod project_fundings;
pub mod project_info;
pub mod project_keywords;
pub mod project_scientific_areas;
pub mod project_scientific_domains;
pub mod research_entity;
pub mod scientific_area;
pub mod scientific_domain;
pub mod user;
pub mod user_projects;
pub mod version;

pub use health::health;
pub use openapi::{create_app, create_openapi_spec};
pub use version::version;
