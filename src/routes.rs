//! Controller registry.
//!
//! Every controller belongs to at most one microservice. A process mounts
//! the controllers without an id plus those whose id is listed in
//! `SERVICE_IDS`, so the same binary can be deployed as several services.

use crate::{config::RoutingConfig, handlers};
use paperclip::actix::web;

/// Microservice identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId(pub u32);

/// Research projects, people and funding
pub const RESEARCH: ServiceId = ServiceId(1);
/// Companies, drones and drone parts
pub const DRONES: ServiceId = ServiceId(2);

pub struct Controller {
    pub name: &'static str,
    /// `None` for controllers every process serves
    pub service_id: Option<ServiceId>,
    pub configure: fn(&mut web::ServiceConfig),
}

const fn controller(
    name: &'static str,
    service_id: Option<ServiceId>,
    configure: fn(&mut web::ServiceConfig),
) -> Controller {
    Controller {
        name,
        service_id,
        configure,
    }
}

pub static CONTROLLERS: &[Controller] = &[
    controller("test", None, handlers::probe::configure),
    controller("auth", None, handlers::auth::configure),
    controller("user", Some(RESEARCH), handlers::user::configure),
    controller("userprojects", Some(RESEARCH), handlers::user_projects::configure),
    controller("project", Some(RESEARCH), handlers::project::configure),
    controller("projectinfo", Some(RESEARCH), handlers::project_info::configure),
    controller("keywords", Some(RESEARCH), handlers::keyword::configure),
    controller("projectkeywords", Some(RESEARCH), handlers::project_keywords::configure),
    controller("scientificdomain", Some(RESEARCH), handlers::scientific_domain::configure),
    controller(
        "projectscientificdomains",
        Some(RESEARCH),
        handlers::project_scientific_domains::configure,
    ),
    controller("scientificarea", Some(RESEARCH), handlers::scientific_area::configure),
    controller(
        "projectscientificareas",
        Some(RESEARCH),
        handlers::project_scientific_areas::configure,
    ),
    controller("entity", Some(RESEARCH), handlers::research_entity::configure),
    controller("contactpoint", Some(RESEARCH), handlers::contact_point::configure),
    controller(
        "entitycontactpoints",
        Some(RESEARCH),
        handlers::entity_contact_points::configure,
    ),
    controller("funding", Some(RESEARCH), handlers::funding::configure),
    controller("projectfundings", Some(RESEARCH), handlers::project_fundings::configure),
    controller("entityfundings", Some(RESEARCH), handlers::entity_fundings::configure),
    controller("program", Some(RESEARCH), handlers::program::configure),
    controller("programsfundings", Some(RESEARCH), handlers::program_fundings::configure),
    controller("company", Some(DRONES), handlers::company::configure),
    controller("droneparts", Some(DRONES), handlers::drone_parts::configure),
    controller("drone", Some(DRONES), handlers::drone::configure),
    controller("dronehasparts", Some(DRONES), handlers::drone_has_parts::configure),
];

/// Controllers this process serves
pub fn enabled(routing: &RoutingConfig) -> impl Iterator<Item = &'static Controller> + '_ {
    CONTROLLERS
        .iter()
        .filter(|c| c.service_id.is_none_or(|id| routing.serves(id)))
}

/// Mount every enabled controller on `cfg`
pub fn mount(cfg: &mut web::ServiceConfig, routing: &RoutingConfig) {
    for controller in enabled(routing) {
        tracing::debug!(
            controller = controller.name,
            service_id = ?controller.service_id.map(|id| id.0),
            "mounting controller"
        );
        (controller.configure)(cfg);
    }
}
