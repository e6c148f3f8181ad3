//! Walking-route integration for marcheroute
//!
//! Two routing backends sharing one base URL:
//!
//! - [`OsrmClient`]: `GET {base}/route/v1/foot/{lon,lat;...}` returning GeoJSON
//!   geometry
//! - [`GraphHopperClient`]: `POST {base}/route` with `{lat, lng}` points,
//!   passing the response body through
//!
//! Both implement [`RoutingClient`]. Neither retries; the caller decides
//! what to do with a failure.

mod client;
mod config;
mod error;
mod graphhopper;
mod models;
mod osrm;

pub use client::RoutingClient;
pub use config::RoutingConfig;
pub use error::RoutingError;
pub use graphhopper::GraphHopperClient;
pub use osrm::{OsrmClient, coordinate_path};
