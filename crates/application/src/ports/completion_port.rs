//! Completion port
//!
//! Single-turn text completion against a hosted language model.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for prompt completion
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send `prompt` as a single user message and return the answer text
    ///
    /// # Errors
    /// - [`ApplicationError::Configuration`] when no credential is configured
    /// - [`ApplicationError::Inference`] when the upstream call fails
    async fn complete(&self, prompt: &str) -> Result<String, ApplicationError>;

    /// Model identifier used for completions
    fn model_name(&self) -> &str;
}
