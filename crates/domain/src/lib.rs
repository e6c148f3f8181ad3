//! Domain layer for marcheroute
//!
//! Contains the value objects and entities of a trip plan: coordinates,
//! bounding boxes, points of interest, route results and the plan itself.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
