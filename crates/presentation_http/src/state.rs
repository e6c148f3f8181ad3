//! Application state shared across handlers

use std::sync::Arc;

use application::{ApplicationError, PromptService, RouteService, TripPlannerService};
use infrastructure::{
    AppConfig, MistralCompletionAdapter, NominatimGeocodingAdapter, OverpassDiscoveryAdapter,
    routing_backends,
};
use tracing::info;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Geocode, discover, select and route
    pub trip_planner: Arc<TripPlannerService>,
    /// Prompt pass-through to the language model
    pub prompt_service: Arc<PromptService>,
}

impl AppState {
    /// Wire adapters and services from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if one of the HTTP clients cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let geocoder = NominatimGeocodingAdapter::new(&config.geocoding.to_client_config())?;
        let discovery = OverpassDiscoveryAdapter::new(&config.discovery.to_client_config())?;

        let backends = routing_backends(config.routing.to_client_config().as_ref())?;
        let router = RouteService::new(backends);
        if !router.is_configured() {
            info!("No routing backend configured, routes use the straight-line fallback");
        }

        let completion = MistralCompletionAdapter::new(
            config.completion.to_client_config(),
            config.completion.api_key.as_ref(),
        )?;

        Ok(Self {
            trip_planner: Arc::new(TripPlannerService::new(
                Arc::new(geocoder),
                Arc::new(discovery),
                Arc::new(router),
            )),
            prompt_service: Arc::new(PromptService::new(Arc::new(completion))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        let debug = format!("{state:?}");
        assert!(debug.contains("TripPlannerService"));
        assert!(debug.contains("PromptService"));
    }
}
