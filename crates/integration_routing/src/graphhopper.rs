//! GraphHopper-compatible routing client

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, RouteResult};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    client::RoutingClient, config::RoutingConfig, error::RoutingError,
    models::GraphHopperRequest,
};

/// Client for a GraphHopper-style `POST /route` endpoint
///
/// The response body is returned as-is; its shape is not validated.
#[derive(Debug)]
pub struct GraphHopperClient {
    client: Client,
    config: RoutingConfig,
}

impl GraphHopperClient {
    /// Create a new GraphHopper client
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
impl RoutingClient for GraphHopperClient {
    fn name(&self) -> &'static str {
        "graphhopper"
    }

    #[instrument(skip(self, waypoints), fields(waypoints = waypoints.len()))]
    async fn route(&self, waypoints: &[Coordinate]) -> Result<RouteResult, RoutingError> {
        let url = format!("{}/route", self.config.base());

        let response = self
            .client
            .post(&url)
            .json(&GraphHopperRequest::new(waypoints))
            .send()
            .await
            .map_err(|e| RoutingError::from_transport(&e, self.config.timeout_secs))?;

        if !response.status().is_success() {
            return Err(RoutingError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        debug!("GraphHopper route received");
        Ok(RouteResult::ProviderB { payload })
    }
}
