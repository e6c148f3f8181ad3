//! Trip planning handlers

use application::DEFAULT_DURATION_MINUTES;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use domain::TripPlan;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Plan request body
#[derive(Debug, Deserialize, Validate)]
pub struct PlanRequest {
    /// Free-text city name
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    /// Walk duration; accepted but does not shape the plan
    #[serde(default)]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub duration_minutes: Option<u32>,
    /// Free-text preferences; accepted and ignored
    #[serde(default)]
    pub preferences: Option<String>,
}

impl PlanRequest {
    fn duration(&self) -> u32 {
        self.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)
    }
}

/// Plan a walk from a JSON body
#[instrument(skip(state, request), fields(city = %request.city))]
pub async fn plan_trip(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PlanRequest>,
) -> Result<Json<TripPlan>, ApiError> {
    run_plan(&state, &request).await
}

/// Plan a walk from path parameters: `/plan/{city}/{duration_minutes}`
#[instrument(skip(state, params))]
pub async fn plan_trip_by_path(
    State(state): State<AppState>,
    params: Result<Path<(String, u32)>, PathRejection>,
) -> Result<Json<TripPlan>, ApiError> {
    let Path((city, duration_minutes)) =
        params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let request = PlanRequest {
        city,
        duration_minutes: Some(duration_minutes),
        preferences: None,
    };
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    run_plan(&state, &request).await
}

async fn run_plan(state: &AppState, request: &PlanRequest) -> Result<Json<TripPlan>, ApiError> {
    let plan = state
        .trip_planner
        .plan(&request.city, request.duration())
        .await?;

    info!(
        city = %plan.city,
        stops = plan.stops.len(),
        route = plan.route.as_ref().map_or("none", |r| r.kind().as_str()),
        "Trip planned"
    );
    Ok(Json(plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let request: PlanRequest = serde_json::from_str(r#"{"city": "Paris"}"#).unwrap();
        assert_eq!(request.city, "Paris");
        assert!(request.duration_minutes.is_none());
        assert!(request.preferences.is_none());
        assert_eq!(request.duration(), DEFAULT_DURATION_MINUTES);
    }

    #[test]
    fn explicit_null_duration_uses_default() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"city": "Paris", "duration_minutes": null}"#).unwrap();
        assert_eq!(request.duration(), DEFAULT_DURATION_MINUTES);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn zero_duration_fails_validation() {
        let request = PlanRequest {
            city: "Paris".into(),
            duration_minutes: Some(0),
            preferences: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn preferences_are_accepted() {
        let request: PlanRequest = serde_json::from_str(
            r#"{"city": "Lyon", "duration_minutes": 45, "preferences": "coffee"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.duration(), 45);
    }
}
