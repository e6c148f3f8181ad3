//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod completion_adapter;
mod geocoding_adapter;
mod poi_discovery_adapter;
mod routing_adapter;

pub use completion_adapter::MistralCompletionAdapter;
pub use geocoding_adapter::NominatimGeocodingAdapter;
pub use poi_discovery_adapter::OverpassDiscoveryAdapter;
pub use routing_adapter::{RoutingBackendAdapter, routing_backends};
