//! Table definitions for the relational store.
//!
//! One sea-orm entity per table. Link tables carry their own surrogate id,
//! except `project_fundings` and `drone_has_parts` which are keyed by the
//! pair they connect.

pub mod company;
pub mod contact_point;
pub mod contact_point_info;
pub mod drone;
pub mod drone_has_part;
pub mod drone_part;
pub mod entity_contact_point;
pub mod entity_funding;
pub mod funding;
pub mod keyword;
pub mod program;
pub mod program_funding;
pub mod project;
pub mod project_funding;
pub mod project_info;
pub mod project_info_link;
pub mod project_keyword;
pub mod project_scientific_area;
pub mod project_scientific_domain;
pub mod research_entity;
pub mod scientific_area;
pub mod scientific_domain;
pub mod user;
pub mod user_project;

pub mod prelude {
    pub use super::company::Entity as Company;
    pub use super::contact_point::Entity as ContactPoint;
    pub use super::contact_point_info::Entity as ContactPointInfo;
    pub use super::drone::Entity as Drone;
    pub use super::drone_has_part::Entity as DroneHasPart;
    pub use super::drone_part::Entity as DronePart;
    pub use super::entity_contact_point::Entity as EntityContactPoint;
    pub use super::entity_funding::Entity as EntityFunding;
    pub use super::funding::Entity as Funding;
    pub use super::keyword::Entity as Keyword;
    pub use super::program::Entity as Program;
    pub use super::program_funding::Entity as ProgramFunding;
    pub use super::project::Entity as Project;
    pub use super::project_funding::Entity as ProjectFunding;
    pub use super::project_info::Entity as ProjectInfo;
    pub use super::project_info_link::Entity as ProjectInfoLink;
    pub use super::project_keyword::Entity as ProjectKeyword;
    pub use super::project_scientific_area::Entity as ProjectScientificArea;
    pub use super::project_scientific_domain::Entity as ProjectScientificDomain;
    pub use super::research_entity::Entity as ResearchEntity;
    pub use super::scientific_area::Entity as ScientificArea;
    pub use super::scientific_domain::Entity as ScientificDomain;
    pub use super::user::Entity as User;
    pub use super::user_project::Entity as UserProject;
}
