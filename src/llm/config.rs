//! LLM configuration.
//!
//! Everything is read through a key lookup so the parsing rules can be
//! exercised with a plain map; [`LlmConfig::from_env`] plugs in the process
//! environment.

use super::types::LlmError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    Anthropic,
    OpenAi,
}

impl LlmProviderKind {
    fn parse(raw: &str) -> Result<Self, LlmError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAi),
            other => Err(LlmError::ConfigParse(format!("unknown LLM_PROVIDER: {other}"))),
        }
    }

    /// Key variable consulted when `LLM_API_KEY_ENV` is not set.
    #[must_use]
    pub fn default_key_var(self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Anthropic => "claude-sonnet-4-5-20250929",
            Self::OpenAi => "gpt-4o",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenAiApiMode {
    ChatCompletions,
    #[default]
    Responses,
}

impl OpenAiApiMode {
    fn parse(raw: &str) -> Result<Self, LlmError> {
        match raw.trim() {
            "responses" => Ok(Self::Responses),
            "chat_completions" => Ok(Self::ChatCompletions),
            other => Err(LlmError::ConfigParse(format!(
                "unsupported LLM_OPENAI_MODE '{other}' (expected 'responses' or 'chat_completions')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LlmTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    pub openai_mode: OpenAiApiMode,
    pub openai_base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Read the config from process environment variables:
    ///
    /// - `LLM_PROVIDER`: `anthropic` (default) or `openai`
    /// - `LLM_API_KEY_ENV`: name of the variable holding the key; defaults to
    ///   `ANTHROPIC_API_KEY` or `OPENAI_API_KEY` per provider
    /// - `LLM_MODEL`: provider default when absent
    /// - `LLM_OPENAI_MODE`: `responses` (default) or `chat_completions`
    /// - `LLM_OPENAI_BASE_URL`: any OpenAI-compatible endpoint
    /// - `LLM_REQUEST_TIMEOUT_SECS` (120), `LLM_CONNECT_TIMEOUT_SECS` (10)
    ///
    /// # Errors
    ///
    /// See [`LlmConfig::from_lookup`].
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// [`LlmError::MissingApiKey`] when no key resolves,
    /// [`LlmError::ConfigParse`] for an unknown provider or API mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = get("LLM_PROVIDER")
            .map_or(Ok(LlmProviderKind::Anthropic), |raw| LlmProviderKind::parse(&raw))?;
        let openai_mode = get("LLM_OPENAI_MODE").map_or(Ok(OpenAiApiMode::default()), |raw| OpenAiApiMode::parse(&raw))?;

        let key_var = get("LLM_API_KEY_ENV").unwrap_or_else(|| provider.default_key_var().to_owned());
        let Some(api_key) = get(&key_var) else {
            return Err(LlmError::MissingApiKey { var: key_var });
        };

        let model = get("LLM_MODEL").unwrap_or_else(|| provider.default_model().to_owned());
        let openai_base_url = get("LLM_OPENAI_BASE_URL")
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let timeouts = LlmTimeouts {
            request_secs: parse_or(get("LLM_REQUEST_TIMEOUT_SECS"), DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(get("LLM_CONNECT_TIMEOUT_SECS"), DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, api_key, model, openai_mode, openai_base_url, timeouts })
    }
}

/// Parse `raw` into `T`, falling back to `default` when absent or invalid.
pub(crate) fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// [`parse_or`] over a process environment variable.
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok(), default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
