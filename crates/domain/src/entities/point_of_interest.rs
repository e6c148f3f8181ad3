//! Point of interest entity

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, PoiId};

/// Display name used when the provider record carries no `name` tag
pub const NO_NAME: &str = "(no name)";

/// A tagged location of potential visitor interest
///
/// Serialized flat as `{id, type, lat, lon, tags, name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Provider identifier, `null` when the provider omitted it
    pub id: Option<PoiId>,
    /// Provider element kind (e.g. `node`, `way`, `relation`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the POI (the element centroid for aggregates)
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Raw provider tags
    #[serde(default)]
    pub tags: HashMap<String, String>,
    /// Display name, [`NO_NAME`] when the provider has none
    pub name: String,
}

impl PointOfInterest {
    /// Create a POI, deriving the display name from the `name` tag
    #[must_use]
    pub fn new(
        id: Option<PoiId>,
        kind: impl Into<String>,
        coordinate: Coordinate,
        tags: HashMap<String, String>,
    ) -> Self {
        let name = tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| NO_NAME.to_string());
        Self {
            id,
            kind: kind.into(),
            coordinate,
            tags,
            name,
        }
    }
}
