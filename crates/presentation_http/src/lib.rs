//! marcheroute HTTP presentation layer
//!
//! This crate provides the HTTP API for the trip planner.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::{cors_layer, create_app, create_router};
pub use state::AppState;
