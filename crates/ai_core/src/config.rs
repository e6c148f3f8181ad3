//! Configuration for the completion client

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the chat-completions API (without `/chat/completions`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.mistral.ai/v1".to_string()
}

fn default_model() -> String {
    "mistral-small-latest".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl InferenceConfig {
    /// Create a configuration pointing at `base_url`, for testing
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_model: "test-model".to_string(),
            timeout_ms: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_mistral() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api.mistral.ai/v1");
        assert_eq!(config.default_model, "mistral-small-latest");
        assert_eq!(config.timeout_ms, 60000);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: InferenceConfig =
            serde_json::from_str(r#"{"default_model": "mistral-large-latest"}"#).unwrap();
        assert_eq!(config.default_model, "mistral-large-latest");
        assert_eq!(config.base_url, "https://api.mistral.ai/v1");
    }
}
