//! Wire models of the routing backends

use domain::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OSRM `/route` response
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    pub geometry: Value,
}

/// GraphHopper `/route` request body
#[derive(Debug, Serialize)]
pub(crate) struct GraphHopperRequest {
    pub points: Vec<GraphHopperPoint>,
}

/// A point as GraphHopper expects it (`lng`, not `lon`)
#[derive(Debug, Serialize)]
pub(crate) struct GraphHopperPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<&Coordinate> for GraphHopperPoint {
    fn from(c: &Coordinate) -> Self {
        Self {
            lat: c.latitude(),
            lng: c.longitude(),
        }
    }
}

impl GraphHopperRequest {
    pub fn new(waypoints: &[Coordinate]) -> Self {
        Self {
            points: waypoints.iter().map(GraphHopperPoint::from).collect(),
        }
    }
}
