//! Microservice routing configuration.

use crate::routes::ServiceId;
use std::{collections::BTreeSet, env};

/// Which microservice ids this process serves
#[derive(Clone, Debug)]
pub struct RoutingConfig {
    pub service_ids: BTreeSet<ServiceId>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            service_ids: BTreeSet::from([ServiceId(1), ServiceId(2)]),
        }
    }
}

impl RoutingConfig {
    /// Load `SERVICE_IDS`; entries that are not numbers are ignored.
    pub fn from_env() -> Self {
        match env::var("SERVICE_IDS") {
            Ok(raw) => Self::from_list(&raw),
            Err(_) => Self::default(),
        }
    }

    pub fn from_list(raw: &str) -> Self {
        let service_ids = super::split_list(raw)
            .iter()
            .filter_map(|id| id.parse().ok().map(ServiceId))
            .collect();
        Self { service_ids }
    }

    pub fn serves(&self, id: ServiceId) -> bool {
        self.service_ids.contains(&id)
    }
}
