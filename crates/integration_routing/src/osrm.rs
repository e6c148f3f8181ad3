//! OSRM-compatible routing client

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{client::RoutingClient, config::RoutingConfig, error::RoutingError, models::OsrmResponse};

/// OSRM coordinate path: `lon,lat;lon,lat;...`
///
/// OSRM puts longitude first, the reverse of [`Coordinate`]'s order.
#[must_use]
pub fn coordinate_path(waypoints: &[Coordinate]) -> String {
    waypoints
        .iter()
        .map(|c| format!("{},{}", c.longitude(), c.latitude()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Client for the OSRM `route` service
#[derive(Debug)]
pub struct OsrmClient {
    client: Client,
    config: RoutingConfig,
}

impl OsrmClient {
    /// Create a new OSRM client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    fn name(&self) -> &'static str {
        "osrm"
    }

    #[instrument(skip(self, waypoints), fields(waypoints = waypoints.len()))]
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteResult, RoutingError> {
        let url = format!(
            "{}/route/v1/{}/{}",
            self.config.base(),
            self.config.profile,
            coordinate_path(waypoints)
        );

        let response = self
            .client
            .get(&url)
            .query(&[("geometries", "geojson"), ("overview", "full")])
            .send()
            .await
            .map_err(|e| RoutingError::from_transport(&e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(RoutingError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let body: OsrmResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let route = body.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        debug!(code = body.code.as_deref().unwrap_or_default(), "OSRM route found");

        Ok(RouteResult::ProviderA {
            geometry: route.geometry,
        })
    }
}
