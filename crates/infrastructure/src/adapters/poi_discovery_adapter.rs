//! POI discovery adapter - Implements PoiDiscoveryPort using integration_osm
//!
//! Discovery failures never reach the planner: they are logged and turned
//! into an empty result.

use application::{error::ApplicationError, ports::PoiDiscoveryPort};
use async_trait::async_trait;
use domain::{BoundingBox, PointOfInterest};
use integration_osm::{OverpassConfig, OverpassPoiClient, PoiDiscoveryClient};
use tracing::{debug, instrument, warn};

/// Adapter for POI discovery using the Overpass API
pub struct OverpassDiscoveryAdapter {
    client: OverpassPoiClient,
}

impl std::fmt::Debug for OverpassDiscoveryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverpassDiscoveryAdapter")
            .field("client", &"OverpassPoiClient")
            .finish()
    }
}

impl OverpassDiscoveryAdapter {
    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &OverpassConfig) -> Result<Self, ApplicationError> {
        let client = OverpassPoiClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PoiDiscoveryPort for OverpassDiscoveryAdapter {
    #[instrument(skip(self, area))]
    async fn discover(&self, area: &BoundingBox) -> Vec<PointOfInterest> {
        match self.client.discover(area).await {
            Ok(pois) => {
                debug!(poi_count = pois.len(), "POIs discovered");
                pois
            },
            Err(e) => {
                warn!(error = %e, "POI discovery failed, continuing without stops");
                Vec::new()
            },
        }
    }
}
