//! Prompt service - free-text pass-through to the completion backend

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::CompletionPort};

/// Forwards a prompt to the language model and returns its answer
pub struct PromptService {
    completion: Arc<dyn CompletionPort>,
}

impl fmt::Debug for PromptService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptService")
            .field("model", &self.completion.model_name())
            .finish()
    }
}

impl PromptService {
    /// Create a prompt service over `completion`
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    /// Answer `prompt` with a single completion
    ///
    /// # Errors
    /// Propagates the completion backend's error unchanged.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<String, ApplicationError> {
        let answer = self.completion.complete(prompt).await?;
        debug!(
            model = self.completion.model_name(),
            answer_len = answer.len(),
            "Prompt answered"
        );
        Ok(answer)
    }
}
