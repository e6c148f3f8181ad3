//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! integration crates, and owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, CompletionAppConfig, DiscoveryAppConfig, GeocodingAppConfig, RoutingAppConfig,
    ServerConfig,
};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_tracing};
