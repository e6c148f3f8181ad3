//! Route result entity
//!
//! A route records which source produced its geometry. Provider payloads
//! are passed through as opaque JSON; only the straight-line fallback has
//! a shape owned by this crate.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::Coordinate;

/// Provenance of a [`RouteResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Synthetic straight-line path through the waypoints
    Fallback,
    /// OSRM-compatible backend
    ProviderA,
    /// GraphHopper-compatible backend
    ProviderB,
}

impl RouteKind {
    /// Stable label of the provenance
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::ProviderA => "provider-a",
            Self::ProviderB => "provider-b",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route geometry connecting the trip waypoints
///
/// Wire format (tag `type`):
/// - `{"type":"fallback","polyline":[[lat,lon],..]}`
/// - `{"type":"osrm","geojson":<geometry>}`
/// - `{"type":"graphhopper","json":<response body>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RouteResult {
    /// Straight-line path through the waypoints, in order
    #[serde(rename = "fallback")]
    Fallback {
        #[serde(with = "lat_lon_pairs")]
        polyline: Vec<Coordinate>,
    },
    /// Geometry of the first OSRM route
    #[serde(rename = "osrm")]
    ProviderA {
        #[serde(rename = "geojson")]
        geometry: Value,
    },
    /// Full GraphHopper response body
    #[serde(rename = "graphhopper")]
    ProviderB {
        #[serde(rename = "json")]
        payload: Value,
    },
}

impl RouteResult {
    /// Build the straight-line fallback through `waypoints`
    #[must_use]
    pub fn fallback(waypoints: &[Coordinate]) -> Self {
        Self::Fallback {
            polyline: waypoints.to_vec(),
        }
    }

    /// Provenance tag
    #[must_use]
    pub const fn kind(&self) -> RouteKind {
        match self {
            Self::Fallback { .. } => RouteKind::Fallback,
            Self::ProviderA { .. } => RouteKind::ProviderA,
            Self::ProviderB { .. } => RouteKind::ProviderB,
        }
    }
}

/// Serializes coordinates as `[lat, lon]` arrays
mod lat_lon_pairs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::value_objects::Coordinate;

    pub fn serialize<S: Serializer>(points: &[Coordinate], s: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<(f64, f64)> = points.iter().map(Coordinate::lat_lon).collect();
        pairs.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Coordinate>, D::Error> {
        let pairs = Vec::<(f64, f64)>::deserialize(d)?;
        pairs
            .into_iter()
            .map(|(lat, lon)| Coordinate::new(lat, lon).map_err(serde::de::Error::custom))
            .collect()
    }
}
