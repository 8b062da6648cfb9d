//! LLM — provider adapters behind a single completion interface.
//!
//! DESIGN
//! ======
//! `LlmClient` picks Anthropic or an OpenAI-compatible endpoint from
//! configuration and exposes both as one [`LlmBackend`]. The generation
//! pipeline sits one level higher still and only sees [`TextGenerator`],
//! which [`LlmTextGenerator`] builds from any backend.
//!
//! TRADE-OFFS
//! ==========
//! Requests are single-turn and text-only. Multi-turn history and tool use
//! are not representable, which keeps both provider adapters small.

pub mod anthropic;
pub mod config;
mod http;
pub mod openai;
pub mod text;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use text::{LlmTextGenerator, TextGenerator};
pub use types::{Completion, CompletionRequest, FinishReason, LlmBackend, LlmError, TokenUsage};

/// Configured provider client.
pub enum LlmClient {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// # Errors
    ///
    /// Missing key, bad provider or mode, or HTTP client build failure.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] when the HTTP client cannot be built.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Ok(match config.provider {
            LlmProviderKind::Anthropic => {
                Self::Anthropic(anthropic::AnthropicClient::new(config.api_key, config.model, config.timeouts)?)
            }
            LlmProviderKind::OpenAi => Self::OpenAi(openai::OpenAiClient::new(
                config.api_key,
                config.model,
                config.openai_mode,
                &config.openai_base_url,
                config.timeouts,
            )?),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::Anthropic(c) => c.model(),
            Self::OpenAi(c) => c.model(),
        }
    }
}

#[async_trait::async_trait]
impl LlmBackend for LlmClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, LlmError> {
        match self {
            Self::Anthropic(c) => c.complete(request).await,
            Self::OpenAi(c) => c.complete(request).await,
        }
    }
}
