//! Consul API response types

use serde::Deserialize;

use crate::core::health::HealthCheckRecord;

/// One service instance returned by `/v1/health/service/:service`
///
/// Only the checks are kept; node and service metadata are not evaluated.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    #[serde(rename = "Checks", default)]
    pub checks: Vec<HealthCheckRecord>,
}

/// Flattens service entries into their checks, keeping response order
pub fn flatten_checks(entries: Vec<ServiceEntry>) -> Vec<HealthCheckRecord> {
    entries.into_iter().flat_map(|entry| entry.checks).collect()
}
