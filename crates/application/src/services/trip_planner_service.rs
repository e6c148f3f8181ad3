//! Trip planner service - geocode, discover, select, route

use std::{fmt, sync::Arc};

use domain::{Coordinate, TripPlan};
use tracing::{debug, info, instrument};

use super::{RouteService, poi_selector};
use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, PoiDiscoveryPort},
};

/// Walk length assumed when the caller does not give one
///
/// The duration is accepted and logged but does not yet influence stop
/// selection or routing.
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Orchestrates a full planning request
pub struct TripPlannerService {
    geocoder: Arc<dyn GeocodingPort>,
    discovery: Arc<dyn PoiDiscoveryPort>,
    router: Arc<RouteService>,
}

impl fmt::Debug for TripPlannerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripPlannerService")
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

impl TripPlannerService {
    /// Create a planner from its collaborators
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        discovery: Arc<dyn PoiDiscoveryPort>,
        router: Arc<RouteService>,
    ) -> Self {
        Self {
            geocoder,
            discovery,
            router,
        }
    }

    /// Plan a walk through `city`
    ///
    /// A city without discoverable POIs still yields a plan holding the
    /// center only, with no route.
    ///
    /// # Errors
    /// Only geocoding failures propagate. Discovery and routing degrade.
    #[instrument(skip(self))]
    pub async fn plan(&self, city: &str, duration_minutes: u32) -> Result<TripPlan, ApplicationError> {
        let place = self.geocoder.geocode(city).await?;
        debug!(center = %place.center, "City geocoded");

        let candidates = self.discovery.discover(&place.bounding_box).await;
        if candidates.is_empty() {
            info!("No points of interest found");
            return Ok(TripPlan::center_only(city, place.center));
        }

        let stops = poi_selector::select(&candidates);
        let waypoints: Vec<Coordinate> = TripPlan::waypoints(place.center, &stops);
        let route = self.router.route(&waypoints).await;

        info!(
            candidates = candidates.len(),
            stops = stops.len(),
            route = %route.kind(),
            "Trip planned"
        );
        Ok(TripPlan::new(city, place.center, stops, route))
    }
}
