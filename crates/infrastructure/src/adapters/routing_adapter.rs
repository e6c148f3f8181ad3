//! Routing adapter - Implements RoutingBackendPort using integration_routing

use std::sync::Arc;

use application::{error::ApplicationError, ports::RoutingBackendPort};
use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
use integration_routing::{GraphHopperClient, OsrmClient, RoutingClient, RoutingConfig};
use tracing::{info, instrument};

/// Adapter exposing one routing client as a backend of the route chain
pub struct RoutingBackendAdapter {
    client: Arc<dyn RoutingClient>,
}

impl std::fmt::Debug for RoutingBackendAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingBackendAdapter")
            .field("backend", &self.client.name())
            .finish()
    }
}

impl RoutingBackendAdapter {
    /// Wrap a routing client
    pub fn new(client: Arc<dyn RoutingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingBackendPort for RoutingBackendAdapter {
    fn name(&self) -> &str {
        self.client.name()
    }

    #[instrument(skip(self, waypoints), fields(backend = self.client.name()))]
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteResult, ApplicationError> {
        self.client.route(waypoints).await.map_err(|e| {
            ApplicationError::ExternalService(format!("{} routing failed: {e}", self.client.name()))
        })
    }
}

/// Routing backends in the order they are tried: OSRM, then GraphHopper
///
/// Returns an empty chain when routing is not configured.
///
/// # Errors
///
/// Returns an error if an HTTP client fails to initialize.
pub fn routing_backends(
    config: Option<&RoutingConfig>,
) -> Result<Vec<Arc<dyn RoutingBackendPort>>, ApplicationError> {
    let Some(config) = config else {
        info!("No routing service configured, routes use the straight-line fallback");
        return Ok(Vec::new());
    };

    let osrm = OsrmClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
    let graphhopper = GraphHopperClient::new(config)
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    info!(base_url = %config.base_url, "Routing backends configured");
    Ok(vec![
        Arc::new(RoutingBackendAdapter::new(Arc::new(osrm))),
        Arc::new(RoutingBackendAdapter::new(Arc::new(graphhopper))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_chain_is_empty() {
        assert!(routing_backends(None).unwrap().is_empty());
    }

    #[test]
    fn configured_chain_tries_osrm_first() {
        let config = RoutingConfig::new("http://localhost:5000");
        let names: Vec<String> = routing_backends(Some(&config))
            .unwrap()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, vec!["osrm", "graphhopper"]);
    }
}
