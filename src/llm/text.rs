//! Single-prompt text generation capability.
//!
//! The generation pipeline only needs `prompt -> text`. [`TextGenerator`] is
//! that capability; [`LlmTextGenerator`] implements it over any
//! [`LlmBackend`] with a fixed copywriting system instruction.

use std::sync::Arc;

use tracing::{debug, warn};

use super::types::{CompletionRequest, FinishReason, LlmBackend, LlmError};

pub const DEFAULT_GENERATION_MAX_TOKENS: u32 = 2048;

const SYSTEM_PROMPT: &str = "You write conversion-focused landing page copy. \
     Follow the output format in each request exactly.";

/// Text-generation backend consumed by the page generation pipeline.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`. Implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport, auth, rate-limit, or decode failure.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

pub struct LlmTextGenerator {
    backend: Arc<dyn LlmBackend>,
    max_tokens: u32,
}

impl LlmTextGenerator {
    #[must_use]
    pub fn new(backend: Arc<dyn LlmBackend>, max_tokens: u32) -> Self {
        Self { backend, max_tokens }
    }
}

#[async_trait::async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = CompletionRequest { system: SYSTEM_PROMPT, prompt, max_tokens: self.max_tokens };
        let completion = self.backend.complete(request).await?;

        debug!(
            model = %completion.model,
            input_tokens = completion.usage.input,
            output_tokens = completion.usage.output,
            "llm: completion received"
        );
        if completion.finish == FinishReason::Truncated {
            warn!(max_tokens = self.max_tokens, "llm: completion hit the token limit");
        }

        if completion.text.trim().is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        Ok(completion.text)
    }
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
