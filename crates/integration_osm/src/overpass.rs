//! Overpass POI discovery client
//!
//! Queries a fixed set of visitor categories (cafés, restaurants, museums,
//! bookstores, parks) inside a bounding box and normalizes the returned
//! elements into [`PointOfInterest`] values.

use std::{fmt::Write, time::Duration};

use async_trait::async_trait;
use domain::{BoundingBox, Coordinate, PoiId, PointOfInterest};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::OverpassConfig,
    error::DiscoveryError,
    models::{OverpassElement, OverpassResponse},
};

/// Server-side query timeout in seconds
const QUERY_TIMEOUT_SECS: u32 = 25;

/// Upper bound on returned elements
const MAX_RESULTS: u32 = 200;

/// Tag selectors of the queried categories
const CATEGORIES: [(&str, &str); 5] = [
    ("amenity", "cafe"),
    ("amenity", "restaurant"),
    ("tourism", "museum"),
    ("shop", "books"),
    ("leisure", "park"),
];

/// Trait for POI discovery clients
#[async_trait]
pub trait PoiDiscoveryClient: Send + Sync {
    /// Points of interest inside `area`, in provider order
    async fn discover(&self, area: &BoundingBox) -> Result<Vec<PointOfInterest>, DiscoveryError>;
}

/// Overpass bbox filter: `south,west,north,east`
///
/// The Overpass QL order differs from the `(south, north, west, east)`
/// order [`BoundingBox`] is built in.
#[must_use]
pub fn bbox_filter(area: &BoundingBox) -> String {
    format!(
        "{},{},{},{}",
        area.south(),
        area.west(),
        area.north(),
        area.east()
    )
}

/// Full Overpass QL query for the visitor categories inside `area`
#[must_use]
pub fn build_query(area: &BoundingBox) -> String {
    let bbox = bbox_filter(area);
    let mut query = format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n");
    for (key, value) in CATEGORIES {
        let _ = writeln!(query, "  node[\"{key}\"=\"{value}\"]({bbox});");
    }
    let _ = write!(query, ");\nout center {MAX_RESULTS};\n");
    query
}

/// Overpass-based POI discovery client
#[derive(Debug)]
pub struct OverpassPoiClient {
    client: Client,
    config: OverpassConfig,
}

impl OverpassPoiClient {
    /// Create a new Overpass client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OverpassConfig) -> Result<Self, DiscoveryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DiscoveryError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl PoiDiscoveryClient for OverpassPoiClient {
    #[instrument(skip(self), fields(bbox = %bbox_filter(area)))]
    async fn discover(&self, area: &BoundingBox) -> Result<Vec<PointOfInterest>, DiscoveryError> {
        let response = self
            .client
            .post(&self.config.base_url)
            .body(build_query(area))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DiscoveryError::Timeout
                } else {
                    DiscoveryError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(DiscoveryError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| DiscoveryError::ParseError(e.to_string()))?;

        let total = body.elements.len();
        let pois = normalize(body.elements);
        debug!(elements = total, poi_count = pois.len(), "Overpass query answered");
        Ok(pois)
    }
}

/// Convert raw elements, dropping malformed ones and the ones without a
/// usable location
fn normalize(elements: Vec<serde_json::Value>) -> Vec<PointOfInterest> {
    elements
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<OverpassElement>(raw) {
            Ok(element) => to_poi(element),
            Err(e) => {
                debug!(error = %e, "Dropping malformed element");
                None
            },
        })
        .collect()
}

fn to_poi(element: OverpassElement) -> Option<PointOfInterest> {
    let (Some(lat), Some(lon)) = (element.resolved_lat(), element.resolved_lon()) else {
        debug!(id = ?element.id, "Dropping element without coordinates");
        return None;
    };
    let coordinate = match Coordinate::new(lat, lon) {
        Ok(c) => c,
        Err(e) => {
            debug!(id = ?element.id, error = %e, "Dropping element with invalid coordinates");
            return None;
        },
    };

    Some(PointOfInterest::new(
        element.id.map(PoiId::new),
        element.kind.unwrap_or_else(|| "unknown".to_string()),
        coordinate,
        element.tags.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use domain::NO_NAME;

    use super::*;

    fn paris() -> BoundingBox {
        BoundingBox::new(48.8155755, 48.902156, 2.224122, 2.4697602).unwrap()
    }

    fn elements(json: &str) -> Vec<serde_json::Value> {
        serde_json::from_str::<OverpassResponse>(json).unwrap().elements
    }

    #[test]
    fn bbox_filter_reorders_to_south_west_north_east() {
        let area = BoundingBox::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(bbox_filter(&area), "1,3,2,4");
    }

    #[test]
    fn query_covers_all_categories() {
        let query = build_query(&paris());
        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.trim_end().ends_with("out center 200;"));
        for selector in [
            r#"node["amenity"="cafe"]"#,
            r#"node["amenity"="restaurant"]"#,
            r#"node["tourism"="museum"]"#,
            r#"node["shop"="books"]"#,
            r#"node["leisure"="park"]"#,
        ] {
            assert!(query.contains(selector), "missing {selector}");
        }
        assert_eq!(
            query.matches("(48.8155755,2.224122,48.902156,2.4697602)").count(),
            5
        );
    }

    #[test]
    fn normalize_keeps_order_and_fills_defaults() {
        let pois = normalize(elements(
            r#"{"elements": [
                {"type": "node", "id": 10, "lat": 48.85, "lon": 2.35, "tags": {"name": "Café A"}},
                {"type": "way", "id": 11, "center": {"lat": 48.86, "lon": 2.34}},
                {"type": "node", "id": 12, "lat": 48.87, "lon": 2.33, "tags": {"amenity": "cafe"}}
            ]}"#,
        ));

        let ids: Vec<u64> = pois.iter().map(|p| p.id.unwrap().value()).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert_eq!(pois[0].name, "Café A");
        assert_eq!(pois[1].kind, "way");
        assert!(pois[1].tags.is_empty());
        assert_eq!(pois[1].name, NO_NAME);
        assert_eq!(pois[2].name, NO_NAME);
    }

    #[test]
    fn normalize_drops_unlocatable_elements() {
        let pois = normalize(elements(
            r#"{"elements": [
                {"type": "relation", "id": 1},
                {"type": "node", "id": 2, "lat": 48.85},
                {"type": "way", "id": 3, "center": {"lon": 2.3}},
                {"type": "node", "id": 4, "lat": null, "lon": null},
                {"type": "node", "lat": 48.85, "lon": 2.35},
                {"type": "node", "id": 5, "lat": 95.0, "lon": 2.35},
                {"type": "node", "id": 6, "lat": 48.85, "lon": 2.35}
            ]}"#,
        ));
        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].id, None);
        assert_eq!(pois[0].kind, "node");
        assert_eq!(pois[1].id, Some(PoiId::new(6)));
    }

    #[test]
    fn normalize_skips_elements_that_fail_to_decode() {
        let pois = normalize(elements(
            r#"{"elements": [
                {"type": "node", "id": 20, "lat": "48.85", "lon": 2.35},
                {"type": "node", "id": 21, "lat": 48.86, "lon": 2.34, "tags": {"capacity": 5}},
                {"type": "node", "id": 22, "lat": 48.87, "lon": 2.33, "tags": {"name": "Parc"}},
                "not an element"
            ]}"#,
        ));
        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].id, Some(PoiId::new(22)));
        assert_eq!(pois[0].name, "Parc");
    }

    #[test]
    fn zero_latitude_is_a_coordinate() {
        let pois = normalize(elements(
            r#"{"elements": [{"type": "node", "id": 7, "lat": 0.0, "lon": 0.0}]}"#,
        ));
        assert_eq!(pois.len(), 1);
    }
}
