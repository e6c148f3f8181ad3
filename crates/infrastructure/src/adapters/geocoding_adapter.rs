//! Geocoding adapter - Implements GeocodingPort using integration_osm

use application::{
    error::ApplicationError,
    ports::{GeocodedPlace, GeocodingPort},
};
use async_trait::async_trait;
use integration_osm::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
use tracing::{instrument, warn};

/// Adapter for city geocoding using Nominatim
pub struct NominatimGeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl std::fmt::Debug for NominatimGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl NominatimGeocodingAdapter {
    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(city: &str, err: &GeocodingError) -> ApplicationError {
        if err.is_not_found() {
            ApplicationError::NotFound(format!("City not found: {city}"))
        } else {
            ApplicationError::ExternalService(format!("Geocoding failed: {err}"))
        }
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<GeocodedPlace, ApplicationError> {
        let place = self.client.geocode(city).await.map_err(|e| {
            warn!(%city, error = %e, "Geocoding failed");
            Self::map_error(city, &e)
        })?;

        Ok(GeocodedPlace {
            center: place.center,
            bounding_box: place.bounding_box,
        })
    }
}
