//! OpenAI-compatible client.
//!
//! Speaks either `/chat/completions` or `/responses`, picked by
//! [`OpenAiApiMode`]. The base URL is configurable so any compatible gateway
//! works. Both response shapes decode into typed structs; fields a gateway
//! may omit are defaulted rather than rejected.

use serde::{Deserialize, Serialize};

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::http;
use super::types::{Completion, CompletionRequest, FinishReason, LlmError, TokenUsage, join_segments};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] when the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        model: String,
        mode: OpenAiApiMode,
        base_url: &str,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            http: http::build_client(timeouts)?,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_owned(),
            mode,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// # Errors
    ///
    /// Transport, status, and decode failures as [`LlmError`].
    pub async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion, LlmError> {
        match self.mode {
            OpenAiApiMode::ChatCompletions => {
                let body = ChatCompletionsRequest::new(&self.model, &request);
                let raw = self.post("/chat/completions", &body).await?;
                parse_chat_completions(&raw)
            }
            OpenAiApiMode::Responses => {
                let body = ResponsesRequest::new(&self.model, &request);
                let raw = self.post("/responses", &body).await?;
                parse_responses(&raw)
            }
        }
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{path}", self.base_url);
        http::send(self.http.post(url).bearer_auth(&self.api_key).json(body)).await
    }
}

// =============================================================================
// CHAT COMPLETIONS
// =============================================================================

#[derive(Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatTurn<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatTurn<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> ChatCompletionsRequest<'a> {
    fn new(model: &'a str, request: &CompletionRequest<'a>) -> Self {
        let system = request.system().map(|content| ChatTurn { role: "system", content });
        let user = ChatTurn { role: "user", content: request.prompt };
        Self { model, max_tokens: request.max_tokens, messages: system.into_iter().chain([user]).collect() }
    }
}

#[derive(Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

fn parse_chat_completions(body: &str) -> Result<Completion, LlmError> {
    let response: ChatCompletionsResponse = http::decode(body)?;
    let Some(choice) = response.choices.into_iter().next() else {
        return Err(LlmError::ApiParse("chat completion has no choices".into()));
    };

    let text = choice
        .message
        .and_then(|m| m.content)
        .unwrap_or_default();
    let finish = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Truncated,
        _ => FinishReason::Complete,
    };
    let usage = response
        .usage
        .map(|u| TokenUsage { input: u.prompt_tokens, output: u.completion_tokens })
        .unwrap_or_default();

    Ok(Completion { text, model: response.model, finish, usage })
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<&'a str>,
    input: &'a str,
}

impl<'a> ResponsesRequest<'a> {
    fn new(model: &'a str, request: &CompletionRequest<'a>) -> Self {
        Self { model, max_output_tokens: request.max_tokens, instructions: request.system(), input: request.prompt }
    }
}

#[derive(Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    output: Vec<OutputItem>,
    /// Convenience aggregate some gateways return instead of `output`.
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    incomplete_details: Option<IncompleteDetails>,
    #[serde(default)]
    usage: Option<ResponsesUsage>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<OutputPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputPart {
    #[serde(alias = "text")]
    OutputText { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct IncompleteDetails {
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponsesUsage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

fn parse_responses(body: &str) -> Result<Completion, LlmError> {
    let response: ResponsesResponse = http::decode(body)?;

    let mut text = join_segments(
        response
            .output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { content } => Some(content),
                OutputItem::Other => None,
            })
            .flatten()
            .filter_map(|part| match part {
                OutputPart::OutputText { text } => Some(text.as_str()),
                OutputPart::Other => None,
            }),
    );
    if text.is_empty() {
        text = response.output_text.unwrap_or_default();
    }

    let truncated = response
        .incomplete_details
        .and_then(|d| d.reason)
        .is_some_and(|reason| reason == "max_output_tokens");
    let usage = response
        .usage
        .map(|u| TokenUsage { input: u.input_tokens, output: u.output_tokens })
        .unwrap_or_default();

    Ok(Completion {
        text,
        model: response.model,
        finish: if truncated { FinishReason::Truncated } else { FinishReason::Complete },
        usage,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
