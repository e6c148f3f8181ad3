//! Raw response models of the OSM services

use std::collections::HashMap;

use serde::Deserialize;

/// One Nominatim search hit
///
/// Numbers arrive as strings; the bounding box is ordered
/// `[south, north, west, east]`.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimResult {
    pub lat: String,
    pub lon: String,
    pub boundingbox: Vec<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Overpass JSON response envelope
///
/// Elements stay raw so that one malformed record cannot fail the batch.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
}

/// A node, way or relation
#[derive(Debug, Deserialize)]
pub(crate) struct OverpassElement {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Centroid, present on aggregates queried with `out center`
    #[serde(default)]
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OverpassCenter {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl OverpassElement {
    /// Latitude, taken from the element itself or from its center
    pub fn resolved_lat(&self) -> Option<f64> {
        self.lat
            .or_else(|| self.center.as_ref().and_then(|c| c.lat))
    }

    /// Longitude, taken from the element itself or from its center
    pub fn resolved_lon(&self) -> Option<f64> {
        self.lon
            .or_else(|| self.center.as_ref().and_then(|c| c.lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominatim_result_parsing() {
        let json = r#"[{
            "lat": "48.8534951",
            "lon": "2.3483915",
            "boundingbox": ["48.8155755", "48.9021560", "2.2241220", "2.4697602"],
            "display_name": "Paris, Île-de-France, France"
        }]"#;
        let results: Vec<NominatimResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].lat, "48.8534951");
        assert_eq!(results[0].boundingbox[1], "48.9021560");
    }

    #[test]
    fn node_coordinates_are_direct() {
        let el: OverpassElement = serde_json::from_str(
            r#"{"type": "node", "id": 1, "lat": 48.85, "lon": 2.35}"#,
        )
        .unwrap();
        assert_eq!(el.resolved_lat(), Some(48.85));
        assert_eq!(el.resolved_lon(), Some(2.35));
    }

    #[test]
    fn way_coordinates_come_from_center() {
        let el: OverpassElement = serde_json::from_str(
            r#"{"type": "way", "id": 2, "center": {"lat": 48.86, "lon": 2.33}}"#,
        )
        .unwrap();
        assert_eq!(el.resolved_lat(), Some(48.86));
        assert_eq!(el.resolved_lon(), Some(2.33));
    }

    #[test]
    fn null_is_absent_and_center_is_per_field() {
        let el: OverpassElement = serde_json::from_str(
            r#"{"type": "way", "id": 3, "lat": null, "lon": 2.30, "center": {"lat": 48.87}}"#,
        )
        .unwrap();
        assert_eq!(el.resolved_lat(), Some(48.87));
        assert_eq!(el.resolved_lon(), Some(2.30));
    }

    #[test]
    fn missing_everything_resolves_nothing() {
        let el: OverpassElement = serde_json::from_str(r#"{"type": "relation", "id": 4}"#).unwrap();
        assert_eq!(el.resolved_lat(), None);
        assert_eq!(el.resolved_lon(), None);
        assert!(el.tags.is_none());
    }

    #[test]
    fn missing_elements_is_empty() {
        let resp: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.elements.is_empty());
    }

    #[test]
    fn malformed_element_does_not_fail_envelope() {
        let resp: OverpassResponse = serde_json::from_str(
            r#"{"elements": [{"type": "node", "id": 1, "lat": "48.85", "lon": 2.35}]}"#,
        )
        .unwrap();
        assert_eq!(resp.elements.len(), 1);
        assert!(serde_json::from_value::<OverpassElement>(resp.elements[0].clone()).is_err());
    }
}
