//! Provider-neutral completion types.
//!
//! Page generation is single-turn: one system instruction, one prompt, one
//! text answer. Both providers are folded into that shape at the wire
//! boundary so nothing downstream sees provider-specific blocks.

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// No key could be resolved; `var` is the variable that was consulted.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// Transport failure: DNS, TLS, timeout, connection reset.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    #[error("API response parse failed: {0}")]
    ApiParse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The provider answered, but with no text at all.
    #[error("completion contained no text")]
    EmptyCompletion,
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::EmptyCompletion => "E_EMPTY_COMPLETION",
        }
    }

    fn retryable(&self) -> bool {
        matches!(
            self,
            Self::ApiRequest(_) | Self::EmptyCompletion | Self::ApiResponse { status: 429 | 500..=599, .. }
        )
    }
}

// =============================================================================
// REQUEST / COMPLETION
// =============================================================================

/// One single-turn completion request. The model is fixed per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
}

impl<'a> CompletionRequest<'a> {
    /// System instruction, or `None` when blank.
    #[must_use]
    pub fn system(&self) -> Option<&'a str> {
        let system = self.system.trim();
        (!system.is_empty()).then_some(self.system)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinishReason {
    #[default]
    Complete,
    /// The token budget ran out mid-answer.
    Truncated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub model: String,
    pub finish: FinishReason,
    pub usage: TokenUsage,
}

/// Join the non-empty text segments of a response, in order.
pub(crate) fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Anything that can answer a [`CompletionRequest`]. Mocked in tests.
#[async_trait::async_trait]
pub trait LlmBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`LlmError`] when the provider is unreachable, rejects the
    /// request, or answers with a body that cannot be decoded.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
