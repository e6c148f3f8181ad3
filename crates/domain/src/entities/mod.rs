//! Domain entities - Request-scoped results of the planning pipeline

mod point_of_interest;
mod route_result;
mod trip_plan;

pub use point_of_interest::{NO_NAME, PointOfInterest};
pub use route_result::{RouteKind, RouteResult};
pub use trip_plan::{MAX_STOPS, TripPlan};
