//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Trip planning
        .route("/plan", post(handlers::plan::plan_trip))
        .route(
            "/plan/{city}/{duration_minutes}",
            get(handlers::plan::plan_trip_by_path),
        )
        // Prompt pass-through
        .route("/generate", post(handlers::generate::generate))
        .with_state(state)
}

/// Router with tracing, CORS and the request body limit applied
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    create_router(state)
        .layer(RequestBodyLimitLayer::new(server.max_body_size_json_bytes))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: any origin when none is configured, otherwise the listed ones
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparsable CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
