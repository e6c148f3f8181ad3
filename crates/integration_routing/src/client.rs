//! Routing client trait

use async_trait::async_trait;
use domain::{Coordinate, RouteResult};

use crate::error::RoutingError;

/// Trait for routing backends
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Backend name, for logs
    fn name(&self) -> &'static str;

    /// Compute a route through `waypoints`, in order
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteResult, RoutingError>;
}
