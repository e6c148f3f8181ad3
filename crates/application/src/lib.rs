//! Application layer - Use cases and orchestration
//!
//! Contains the trip-planning pipeline and the port definitions it
//! depends on. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
