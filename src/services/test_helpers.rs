//! Scripted backends and fixtures shared by the service tests.

use std::sync::{Arc, Mutex};

use crate::context::BusinessContext;
use crate::image::{ImageError, ImageLookup, ImageSearchOptions};
use crate::llm::{LlmError, TextGenerator};

pub const HERO: &str = r##"{"title":"Ship faster","subtitle":"s","description":"d","cta":{"text":"Start","link":"#signup"}}"##;
pub const FEATURES: &str = r#"{"title":"Features","description":"d","items":[{"title":"Fast","description":"d","icon":"bolt"}]}"#;
pub const BENEFITS: &str = r#"{"title":"Benefits","description":"d","items":[{"title":"Save time","description":"d"}]}"#;
pub const CTA: &str = r##"{"title":"Join","description":"d","button":{"text":"Go","link":"#"},"bullets":[{"text":"Free","icon":"check"}]}"##;

// =========================================================================
// Mocks
// =========================================================================

/// Replays scripted responses in order and records every prompt it saw.
pub struct MockText {
    responses: Mutex<Vec<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockText {
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses), prompts: Mutex::new(Vec::new()) })
    }

    pub fn ok(responses: &[&str]) -> Arc<Self> {
        Self::new(responses.iter().map(|r| Ok((*r).to_string())).collect())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockText {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        responses.remove(0)
    }
}

#[derive(Clone, Copy)]
pub enum ImageOutcome {
    Found,
    Nothing,
    Fails,
}

pub struct MockImages {
    outcome: ImageOutcome,
    seen: Mutex<Vec<(String, ImageSearchOptions)>>,
}

impl MockImages {
    pub fn new(outcome: ImageOutcome) -> Arc<Self> {
        Arc::new(Self { outcome, seen: Mutex::new(Vec::new()) })
    }

    pub fn seen(&self) -> Vec<(String, ImageSearchOptions)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ImageLookup for MockImages {
    async fn find(&self, query: &str, options: &ImageSearchOptions) -> Result<Option<String>, ImageError> {
        self.seen.lock().unwrap().push((query.to_string(), *options));
        match self.outcome {
            ImageOutcome::Found => Ok(Some("https://images.test/photo.jpg".into())),
            ImageOutcome::Nothing => Ok(None),
            ImageOutcome::Fails => Err(ImageError::Response { status: 503, body: "down".into() }),
        }
    }
}

pub fn ctx() -> BusinessContext {
    BusinessContext {
        business_name: "Acme".into(),
        industry: "SaaS".into(),
        target_audience: "developers".into(),
        ..BusinessContext::default()
    }
}
