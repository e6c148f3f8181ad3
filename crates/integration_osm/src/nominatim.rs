//! Nominatim geocoding client
//!
//! Resolves a city name to its center and bounding box using the
//! [Nominatim](https://nominatim.openstreetmap.org) search API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{BoundingBox, Coordinate};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{config::NominatimConfig, error::GeocodingError, models::NominatimResult};

/// A resolved place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodedPlace {
    /// Center point reported by Nominatim
    pub center: Coordinate,
    /// Extent of the place, in Nominatim's native order
    pub bounding_box: BoundingBox,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to its best match
    async fn geocode(&self, place: &str) -> Result<GeocodedPlace, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<GeocodedPlace, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::PlaceNotFound(
                "Place must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = [("q", place), ("format", "json"), ("limit", "1")];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::PlaceNotFound(place.to_string()))?;

        let resolved = parse_result(result)?;
        debug!(
            %place,
            center = %resolved.center,
            display_name = result.display_name.as_deref().unwrap_or_default(),
            "Geocoded place"
        );
        Ok(resolved)
    }
}

fn parse_number(raw: &str, field: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse()
        .map_err(|_| GeocodingError::ParseError(format!("Invalid {field}: {raw}")))
}

fn parse_result(result: &NominatimResult) -> Result<GeocodedPlace, GeocodingError> {
    let lat = parse_number(&result.lat, "latitude")?;
    let lon = parse_number(&result.lon, "longitude")?;
    let center =
        Coordinate::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

    let [south, north, west, east] = result.boundingbox.as_slice() else {
        return Err(GeocodingError::ParseError(format!(
            "Expected 4 bounding box values, got {}",
            result.boundingbox.len()
        )));
    };
    let bounding_box = BoundingBox::new(
        parse_number(south, "south")?,
        parse_number(north, "north")?,
        parse_number(west, "west")?,
        parse_number(east, "east")?,
    )
    .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

    Ok(GeocodedPlace {
        center,
        bounding_box,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(boundingbox: &[&str]) -> NominatimResult {
        NominatimResult {
            lat: "48.8534951".to_string(),
            lon: "2.3483915".to_string(),
            boundingbox: boundingbox.iter().map(ToString::to_string).collect(),
            display_name: None,
        }
    }

    #[test]
    fn bounding_box_keeps_native_order() {
        let place = parse_result(&result(&["48.8155755", "48.9021560", "2.2241220", "2.4697602"]))
            .unwrap();
        assert_eq!(
            place.bounding_box.as_south_north_west_east(),
            [48.815_575_5, 48.902_156, 2.224_122, 2.469_760_2]
        );
        assert!((place.center.latitude() - 48.853_495_1).abs() < 1e-9);
    }

    #[test]
    fn short_bounding_box_is_rejected() {
        let err = parse_result(&result(&["48.8", "48.9", "2.2"])).unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn non_numeric_bound_is_rejected() {
        let err = parse_result(&result(&["48.8", "north", "2.2", "2.4"])).unwrap_err();
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn out_of_range_center_is_rejected() {
        let mut raw = result(&["48.8", "48.9", "2.2", "2.4"]);
        raw.lat = "123.0".to_string();
        assert!(matches!(
            parse_result(&raw).unwrap_err(),
            GeocodingError::ParseError(_)
        ));
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(NominatimGeocodingClient::new(&NominatimConfig::default()).is_ok());
    }
}
