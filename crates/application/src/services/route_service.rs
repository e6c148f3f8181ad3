//! Route service - ordered provider chain with a straight-line fallback

use std::{fmt, sync::Arc};

use domain::{Coordinate, RouteResult};
use tracing::{debug, instrument, warn};

use crate::ports::RoutingBackendPort;

/// Computes a walking route through a list of waypoints
///
/// Backends are tried in order and the first success wins. When every
/// backend fails, or none is configured, the result is the straight-line
/// fallback through the waypoints. Routing therefore never fails.
pub struct RouteService {
    backends: Vec<Arc<dyn RoutingBackendPort>>,
}

impl fmt::Debug for RouteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.backends.iter().map(|b| b.name()).collect();
        f.debug_struct("RouteService")
            .field("backends", &names)
            .finish()
    }
}

impl RouteService {
    /// Create a route service trying `backends` in order
    pub fn new(backends: Vec<Arc<dyn RoutingBackendPort>>) -> Self {
        Self { backends }
    }

    /// A route service with no backend; always produces the fallback
    pub fn unconfigured() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Whether at least one routing backend is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.backends.is_empty()
    }

    /// Route through `waypoints`, in order
    #[instrument(skip(self, waypoints), fields(waypoints = waypoints.len()))]
    pub async fn route(&self, waypoints: &[Coordinate]) -> RouteResult {
        for backend in &self.backends {
            match backend.route(waypoints).await {
                Ok(route) => {
                    debug!(backend = backend.name(), "Route computed");
                    return route;
                },
                Err(e) => {
                    warn!(backend = backend.name(), error = %e, "Routing backend failed");
                },
            }
        }

        if self.is_configured() {
            debug!("All routing backends failed, using straight-line fallback");
        }
        RouteResult::fallback(waypoints)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{error::ApplicationError, ports::MockRoutingBackendPort};

    fn waypoints() -> Vec<Coordinate> {
        vec![
            Coordinate::new_unchecked(48.8566, 2.3522),
            Coordinate::new_unchecked(48.8606, 2.3376),
            Coordinate::new_unchecked(48.8530, 2.3499),
        ]
    }

    fn failing(name: &str) -> MockRoutingBackendPort {
        let mut mock = MockRoutingBackendPort::new();
        mock.expect_name().return_const(name.to_string());
        mock.expect_route()
            .times(1)
            .returning(|_| Err(ApplicationError::ExternalService("down".to_string())));
        mock
    }

    #[tokio::test]
    async fn unconfigured_returns_fallback() {
        let service = RouteService::unconfigured();
        assert!(!service.is_configured());

        let route = service.route(&waypoints()).await;
        assert_eq!(route, RouteResult::fallback(&waypoints()));
    }

    #[tokio::test]
    async fn first_success_wins() {
        let geometry = json!({"type": "LineString", "coordinates": [[2.35, 48.85]]});

        let mut osrm = MockRoutingBackendPort::new();
        osrm.expect_name().return_const("osrm".to_string());
        let expected = geometry.clone();
        osrm.expect_route()
            .withf(|w| w.len() == 3)
            .times(1)
            .returning(move |_| {
                Ok(RouteResult::ProviderA {
                    geometry: expected.clone(),
                })
            });

        let mut graphhopper = MockRoutingBackendPort::new();
        graphhopper.expect_name().return_const("graphhopper".to_string());
        graphhopper.expect_route().never();

        let service = RouteService::new(vec![Arc::new(osrm), Arc::new(graphhopper)]);
        let route = service.route(&waypoints()).await;
        assert_eq!(route, RouteResult::ProviderA { geometry });
    }

    #[tokio::test]
    async fn second_backend_used_when_first_fails() {
        let mut graphhopper = MockRoutingBackendPort::new();
        graphhopper.expect_name().return_const("graphhopper".to_string());
        graphhopper.expect_route().times(1).returning(|_| {
            Ok(RouteResult::ProviderB {
                payload: json!({"paths": [{"distance": 1200.0}]}),
            })
        });

        let service = RouteService::new(vec![Arc::new(failing("osrm")), Arc::new(graphhopper)]);
        let route = service.route(&waypoints()).await;
        assert!(matches!(route, RouteResult::ProviderB { .. }));
    }

    #[tokio::test]
    async fn all_failures_fall_back_to_straight_line() {
        let service = RouteService::new(vec![
            Arc::new(failing("osrm")),
            Arc::new(failing("graphhopper")),
        ]);
        let route = service.route(&waypoints()).await;
        assert_eq!(route, RouteResult::fallback(&waypoints()));
    }

    #[test]
    fn debug_lists_backend_names() {
        let mut mock = MockRoutingBackendPort::new();
        mock.expect_name().return_const("osrm".to_string());
        let service = RouteService::new(vec![Arc::new(mock)]);
        assert!(format!("{service:?}").contains("osrm"));
    }
}
