//! Completion adapter - Implements CompletionPort using ai_core

use ai_core::{InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, MistralInferenceEngine};
use application::{error::ApplicationError, ports::CompletionPort};
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

/// Adapter for prompt completion via the Mistral API
///
/// Without an API key the adapter still builds, but every completion
/// fails with a configuration error.
#[derive(Debug)]
pub struct MistralCompletionAdapter {
    engine: Option<MistralInferenceEngine>,
    model: String,
}

impl MistralCompletionAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: InferenceConfig, api_key: Option<&SecretString>) -> Result<Self, ApplicationError> {
        let model = config.default_model.clone();
        let engine = match api_key {
            Some(key) => Some(
                MistralInferenceEngine::new(config, key.clone())
                    .map_err(|e| ApplicationError::Configuration(e.to_string()))?,
            ),
            None => {
                warn!("No completion API key configured, prompt completion is disabled");
                None
            },
        };
        Ok(Self { engine, model })
    }

    /// Whether completions can be served
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Completion API unreachable: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Completion timeout after {ms}ms"))
            },
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl CompletionPort for MistralCompletionAdapter {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, ApplicationError> {
        let engine = self.engine.as_ref().ok_or_else(|| {
            ApplicationError::Configuration("Completion API key is not configured".to_string())
        })?;

        let response = engine
            .generate(InferenceRequest::simple(prompt))
            .await
            .map_err(Self::map_error)?;

        debug!(model = %response.model, usage = ?response.usage, "Completion received");
        Ok(response.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_is_configuration_error() {
        let adapter = MistralCompletionAdapter::new(InferenceConfig::default(), None).unwrap();
        assert!(!adapter.is_enabled());

        let err = adapter.complete("Hello").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn model_name_comes_from_config() {
        let key = SecretString::from("sk-test");
        let adapter =
            MistralCompletionAdapter::new(InferenceConfig::default(), Some(&key)).unwrap();
        assert!(adapter.is_enabled());
        assert_eq!(adapter.model_name(), "mistral-small-latest");
    }

    #[test]
    fn transport_errors_map_to_external_service() {
        assert!(matches!(
            MistralCompletionAdapter::map_error(InferenceError::Timeout(5000)),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            MistralCompletionAdapter::map_error(InferenceError::Unauthorized),
            ApplicationError::Inference(_)
        ));
    }
}
