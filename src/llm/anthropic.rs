//! Anthropic Messages API client.
//!
//! One user turn per request against `/v1/messages`. Only `text` blocks
//! contribute to the answer; thinking and any future block types are
//! dropped during decoding.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::types::{Completion, CompletionRequest, FinishReason, LlmError, TokenUsage, join_segments};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] when the HTTP client cannot be built.
    pub fn new(api_key: String, model: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::build_client(timeouts)?, api_key, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// # Errors
    ///
    /// Transport, status, and decode failures as [`LlmError`].
    pub async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, LlmError> {
        let body = MessagesRequest::new(&self.model, &request);
        let raw = http::send(
            self.http
                .post(API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", API_VERSION)
                .json(&body),
        )
        .await?;
        parse_response(&raw)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: [UserTurn<'a>; 1],
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    fn new(model: &'a str, request: &CompletionRequest<'a>) -> Self {
        Self {
            model,
            max_tokens: request.max_tokens,
            system: request.system(),
            messages: [UserTurn { role: "user", content: request.prompt }],
        }
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<Block>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    usage: Usage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

fn parse_response(body: &str) -> Result<Completion, LlmError> {
    let response: MessagesResponse = http::decode(body)?;

    let text = join_segments(response.content.iter().filter_map(|block| match block {
        Block::Text { text } => Some(text.as_str()),
        Block::Other => None,
    }));
    let finish = match response.stop_reason.as_deref() {
        Some("max_tokens") => FinishReason::Truncated,
        _ => FinishReason::Complete,
    };

    Ok(Completion {
        text,
        model: response.model,
        finish,
        usage: TokenUsage { input: response.usage.input_tokens, output: response.usage.output_tokens },
    })
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
