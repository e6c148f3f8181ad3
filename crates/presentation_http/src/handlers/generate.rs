//! Prompt pass-through handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Generate request body
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    /// Prompt forwarded verbatim as a single user message
    pub prompt: String,
}

/// Generate response body
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// First completion returned by the model
    pub answer: String,
}

/// Answer a prompt with the configured language model
#[instrument(skip(state, request), fields(prompt_len = request.prompt.len()))]
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let answer = state.prompt_service.generate(&request.prompt).await?;
    Ok(Json(GenerateResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserialize() {
        let request: GenerateRequest = serde_json::from_str(r#"{"prompt": "Hi"}"#).unwrap();
        assert_eq!(request.prompt, "Hi");
    }

    #[test]
    fn response_serialize() {
        let json = serde_json::to_value(GenerateResponse {
            answer: "Bonjour".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"answer": "Bonjour"}));
    }
}
