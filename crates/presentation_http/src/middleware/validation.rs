//! Request validation
//!
//! `ValidatedJson` deserializes a JSON body and runs its `validator` rules
//! before the handler sees it.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::error::ErrorResponse;

/// Rejection of a request body
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

impl ValidationError {
    /// Flatten field errors into `field: message` lines, sorted by field
    pub fn from_field_errors(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let lines = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    format!("{field}: {message}")
                })
            })
            .collect();

        Self::ValidationFailed(lines)
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::JsonError(e) => (
                e.status(),
                ErrorResponse {
                    error: e.body_text(),
                    code: "invalid_json".to_string(),
                    details: None,
                },
            ),
            Self::ValidationFailed(lines) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: lines.join("; "),
                    code: "validation_error".to_string(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// A JSON extractor that also validates the request body
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| ValidationError::from_field_errors(&e))?;
        Ok(Self(value))
    }
}
