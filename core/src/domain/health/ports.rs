use std::future::Future;

use crate::domain::health::entities::ApiHealthStatus;

/// Health reporting for the hosting service. Total: degraded collaborators
/// are reported, never surfaced as errors.
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = ApiHealthStatus> + Send;
}
