//! OpenStreetMap integration for marcheroute
//!
//! Provides city geocoding via [Nominatim](https://nominatim.openstreetmap.org)
//! and point-of-interest discovery via the [Overpass API](https://overpass-api.de).
//!
//! # Architecture
//!
//! [`GeocodingClient`] resolves a place name to a center and bounding box,
//! implemented by [`NominatimGeocodingClient`]. [`PoiDiscoveryClient`] runs
//! a category query over a bounding box, implemented by
//! [`OverpassPoiClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_osm::{NominatimConfig, NominatimGeocodingClient, GeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let place = client.geocode("Paris").await?;
//! println!("{}", place.center);
//! ```

mod config;
mod error;
mod models;
mod nominatim;
mod overpass;

pub use config::{NominatimConfig, OverpassConfig};
pub use error::{DiscoveryError, GeocodingError};
pub use nominatim::{GeocodedPlace, GeocodingClient, NominatimGeocodingClient};
pub use overpass::{OverpassPoiClient, PoiDiscoveryClient, bbox_filter, build_query};
