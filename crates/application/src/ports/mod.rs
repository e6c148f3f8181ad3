//! Port definitions - Interfaces for external dependencies
//!
//! Ports define the boundaries of the application. Adapters in the
//! infrastructure layer implement these traits.

mod completion_port;
mod geocoding_port;
mod poi_discovery_port;
mod routing_port;

pub use completion_port::CompletionPort;
pub use geocoding_port::{GeocodedPlace, GeocodingPort};
pub use poi_discovery_port::PoiDiscoveryPort;
pub use routing_port::RoutingBackendPort;

#[cfg(test)]
pub use completion_port::MockCompletionPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use poi_discovery_port::MockPoiDiscoveryPort;
#[cfg(test)]
pub use routing_port::MockRoutingBackendPort;
