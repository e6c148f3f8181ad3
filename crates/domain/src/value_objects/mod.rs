//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod coordinate;
mod poi_id;

pub use bounding_box::BoundingBox;
pub use coordinate::{Coordinate, InvalidCoordinates};
pub use poi_id::PoiId;
