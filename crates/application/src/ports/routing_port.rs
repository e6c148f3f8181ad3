//! Routing backend port
//!
//! A single routing provider. Backends are tried in order by
//! [`RouteService`](crate::services::RouteService); a backend only has to
//! report whether it produced a route.

use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a walking-route provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingBackendPort: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &str;

    /// Compute a route visiting `waypoints` in order
    ///
    /// # Errors
    /// Any failure (transport, status, unusable payload) is an error; the
    /// caller moves on to the next backend.
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteResult, ApplicationError>;
}
