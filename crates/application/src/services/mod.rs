//! Application services - Use case implementations

pub mod poi_selector;
mod prompt_service;
mod route_service;
mod trip_planner_service;

pub use prompt_service::PromptService;
pub use route_service::RouteService;
pub use trip_planner_service::{DEFAULT_DURATION_MINUTES, TripPlannerService};
