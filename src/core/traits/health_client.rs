//! Registry health query interface

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::core::health::HealthCheckRecord;
use crate::utils::error::RegistryError;

/// Read-only health queries against a service registry
///
/// One method per query mode. Connection parameters are fixed when the
/// implementation is constructed.
#[async_trait]
pub trait HealthQueryClient: Send + Sync {
    /// Checks of `service` instances that carry every tag in `tags`
    async fn service_checks_with_tags(
        &self,
        service: &str,
        tags: &BTreeSet<String>,
    ) -> Result<Vec<HealthCheckRecord>, RegistryError>;

    /// Every check reported by `node`
    async fn node_checks(&self, node: &str) -> Result<Vec<HealthCheckRecord>, RegistryError>;

    /// Every check in the fleet, in any state
    async fn all_checks(&self) -> Result<Vec<HealthCheckRecord>, RegistryError>;

    /// Checks of `service`, no tag filter
    async fn service_checks(
        &self,
        service: &str,
    ) -> Result<Vec<HealthCheckRecord>, RegistryError>;
}
