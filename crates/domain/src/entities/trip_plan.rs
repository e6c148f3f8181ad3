//! Trip plan entity - the response root of a planning request

use serde::{Deserialize, Serialize};

use super::{PointOfInterest, RouteResult};
use crate::value_objects::Coordinate;

/// Maximum number of stops a plan carries
pub const MAX_STOPS: usize = 6;

/// A planned walk through a city
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// The city as requested by the caller
    pub city: String,
    /// Geocoded city center, first waypoint of the route
    pub center: Coordinate,
    /// Selected stops in visiting order
    pub stops: Vec<PointOfInterest>,
    /// Route through center and stops; `None` when there are no stops
    pub route: Option<RouteResult>,
}

impl TripPlan {
    /// A plan with stops and a route
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        center: Coordinate,
        stops: Vec<PointOfInterest>,
        route: RouteResult,
    ) -> Self {
        Self {
            city: city.into(),
            center,
            stops,
            route: Some(route),
        }
    }

    /// A degenerate plan: the center only, no stops and no route
    #[must_use]
    pub fn center_only(city: impl Into<String>, center: Coordinate) -> Self {
        Self {
            city: city.into(),
            center,
            stops: Vec::new(),
            route: None,
        }
    }

    /// Route waypoints: the center followed by every stop
    #[must_use]
    pub fn waypoints(center: Coordinate, stops: &[PointOfInterest]) -> Vec<Coordinate> {
        std::iter::once(center)
            .chain(stops.iter().map(|s| s.coordinate))
            .collect()
    }
}
