//! OpenStreetMap error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Geocoding service answered with a non-success status
    #[error("Geocoding request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Place could not be resolved
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

impl GeocodingError {
    /// Whether the caller should treat this as "no such place"
    ///
    /// A non-success status counts as not found: Nominatim answers bad
    /// queries with client errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PlaceNotFound(_) | Self::RequestFailed { .. })
    }
}

/// Errors that can occur during POI discovery
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Connection to the Overpass service failed
    #[error("Overpass connection failed: {0}")]
    ConnectionFailed(String),

    /// Overpass answered with a non-success status
    #[error("Overpass request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the Overpass response
    #[error("Overpass parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Overpass request timed out")]
    Timeout,
}
