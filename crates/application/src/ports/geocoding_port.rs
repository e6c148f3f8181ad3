//! Geocoding port
//!
//! Resolves a free-text city name to a center point and the extent of the
//! place.

use async_trait::async_trait;
use domain::{BoundingBox, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of resolving a city name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodedPlace {
    /// Representative center of the place
    pub center: Coordinate,
    /// Extent of the place as reported by the provider
    pub bounding_box: BoundingBox,
}

/// Port for city geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve `city` to its best match
    ///
    /// # Errors
    /// - [`ApplicationError::NotFound`] when the provider has no match or
    ///   answers with a non-success status
    /// - [`ApplicationError::ExternalService`] when the provider is unreachable
    ///   or returns an unreadable response
    async fn geocode(&self, city: &str) -> Result<GeocodedPlace, ApplicationError>;
}
