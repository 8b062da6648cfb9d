//! Generation pipeline — business context → prompt → model → typed sections.
//!
//! DESIGN
//! ======
//! Both backends are injected at construction; nothing here is global, so
//! tests drive the pipeline with scripted fakes. Text generation failures are
//! hard errors: a section cannot exist without its copy. Image enhancement is
//! best-effort and never fails a call: every problem on that path degrades
//! to "no image" with a warning.
//!
//! The four initial sections are generated sequentially in a fixed order.
//! The first failure aborts the page; no partial list is ever returned.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::component::{ComponentKind, PageComponent};
use crate::context::BusinessContext;
use crate::image::{ImageLookup, ImageSearchOptions, Orientation, SizeHint};
use crate::llm::config::env_parse;
use crate::llm::text::DEFAULT_GENERATION_MAX_TOKENS;
use crate::llm::{LlmError, TextGenerator};

use super::cache::{DEFAULT_CACHE_TTL_SECS, ResponseCache};
use super::{prompt, response};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The backend answered, but not with a usable object for `kind`.
    #[error("failed to parse {kind} content: {reason} (response: {snippet:?})")]
    Parse { kind: ComponentKind, reason: String, snippet: String },

    /// The text backend itself failed.
    #[error("text generation failed: {0}")]
    Backend(#[from] LlmError),
}

impl GenerationError {
    /// Section kind the failure belongs to, when known.
    #[must_use]
    pub fn kind(&self) -> Option<ComponentKind> {
        match self {
            Self::Parse { kind, .. } => Some(*kind),
            Self::Backend(_) => None,
        }
    }
}

impl crate::error::ErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "E_GENERATION_PARSE",
            Self::Backend(_) => "E_GENERATION_BACKEND",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            // Sampling is non-deterministic; a second attempt often parses.
            Self::Parse { .. } => true,
            Self::Backend(e) => e.retryable(),
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub max_tokens: u32,
    /// `None` disables response caching.
    pub cache_ttl: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_GENERATION_MAX_TOKENS, cache_ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)) }
    }
}

impl PipelineConfig {
    /// Read `GENERATION_MAX_TOKENS` (default 2048) and
    /// `GENERATION_CACHE_TTL_SECS` (default 3600, `0` disables the cache).
    #[must_use]
    pub fn from_env() -> Self {
        let max_tokens = env_parse("GENERATION_MAX_TOKENS", DEFAULT_GENERATION_MAX_TOKENS);
        let ttl_secs = env_parse("GENERATION_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS);
        let cache_ttl = (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs));
        Self { max_tokens, cache_ttl }
    }
}

// =============================================================================
// PIPELINE
// =============================================================================

pub struct GenerationPipeline {
    text: Arc<dyn TextGenerator>,
    images: Arc<dyn ImageLookup>,
    cache: Option<ResponseCache>,
}

impl GenerationPipeline {
    /// Pipeline without response caching.
    #[must_use]
    pub fn new(text: Arc<dyn TextGenerator>, images: Arc<dyn ImageLookup>) -> Self {
        Self { text, images, cache: None }
    }

    /// Cache successful text responses for `ttl`, keyed by prompt.
    #[must_use]
    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(ResponseCache::new(ttl));
        self
    }

    #[must_use]
    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    /// Generate one section of `kind` for `ctx`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::Backend`] when the text backend fails,
    /// [`GenerationError::Parse`] when its output is unusable.
    pub async fn generate_component(
        &self,
        kind: ComponentKind,
        ctx: &BusinessContext,
    ) -> Result<PageComponent, GenerationError> {
        let prompt = prompt::component_prompt(kind, ctx);
        info!(%kind, business = %ctx.business_name, prompt_len = prompt.len(), "generation: requesting section");

        let content = self
            .complete_parsed(&prompt, |raw| response::parse_content(kind, raw))
            .await
            .inspect_err(|e| warn!(%kind, error = %e, "generation: section failed"))?;

        let component = PageComponent::generated(content);
        info!(%kind, id = %component.id, "generation: section ready");
        Ok(component)
    }

    /// Generate the default page: hero, features, benefits, cta, in that order.
    ///
    /// # Errors
    ///
    /// Propagates the first section failure. No partial list is returned.
    pub async fn generate_initial_components(
        &self,
        template_id: &str,
        ctx: &BusinessContext,
    ) -> Result<Vec<PageComponent>, GenerationError> {
        info!(%template_id, business = %ctx.business_name, "generation: populating page");
        let mut components = Vec::with_capacity(ComponentKind::INITIAL_ORDER.len());
        for kind in ComponentKind::INITIAL_ORDER {
            components.push(self.generate_component(kind, ctx).await?);
        }
        Ok(components)
    }

    /// Ask the backend to rewrite `component`. The input is left untouched;
    /// on success the returned revision keeps its id and kind.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate_component`].
    pub async fn improve_component(
        &self,
        component: &PageComponent,
        ctx: &BusinessContext,
    ) -> Result<PageComponent, GenerationError> {
        let kind = component.kind();
        let prompt = prompt::improve_prompt(component, ctx);
        info!(%kind, id = %component.id, version = component.version, "generation: improving section");

        let content = self
            .complete_parsed(&prompt, |raw| response::parse_content(kind, raw))
            .await
            .inspect_err(|e| warn!(%kind, id = %component.id, error = %e, "generation: improve failed"))?;

        Ok(component.improved(content))
    }

    /// Attach a searched stock image to a hero, features or benefits section.
    /// Any failure along the way returns `component` unchanged.
    pub async fn enhance_with_image(&self, component: PageComponent, ctx: &BusinessContext) -> PageComponent {
        let kind = component.kind();
        if !kind.supports_image() {
            return component;
        }

        let query = match self.image_query(kind, ctx).await {
            Ok(query) => query,
            Err(e) => {
                warn!(%kind, error = %e, "generation: image query failed, skipping image");
                return component;
            }
        };

        let url = match self.images.find(&query, &image_options(kind)).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(%kind, %query, "generation: no image found");
                return component;
            }
            Err(e) => {
                warn!(%kind, %query, error = %e, "generation: image lookup failed, skipping image");
                return component;
            }
        };

        let mut enhanced = component;
        enhanced.content.attach_image(url);
        info!(%kind, id = %enhanced.id, %query, "generation: image attached");
        enhanced
    }

    async fn image_query(&self, kind: ComponentKind, ctx: &BusinessContext) -> Result<String, LlmError> {
        let prompt = prompt::image_query_prompt(kind, ctx);
        let phrase = self
            .complete_parsed(&prompt, |raw| response::parse_search_phrase(raw).ok_or(QueryError::Unusable))
            .await;
        match phrase {
            Ok(phrase) => Ok(phrase),
            Err(QueryError::Unusable) => {
                debug!(%kind, "generation: no usable search phrase, using fallback");
                Ok(format!("{} {}", ctx.industry, kind))
            }
            Err(QueryError::Backend(e)) => Err(e),
        }
    }

    /// Run `prompt` through the cache and backend, then `parse`. Only output
    /// that parses is cached.
    async fn complete_parsed<T, E>(&self, prompt: &str, parse: impl Fn(&str) -> Result<T, E>) -> Result<T, E>
    where
        E: From<LlmError>,
    {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(prompt)) {
            if let Ok(parsed) = parse(&cached) {
                debug!(prompt_len = prompt.len(), "generation: cache hit");
                return Ok(parsed);
            }
        }

        let raw = self.text.generate(prompt).await?;
        let parsed = parse(&raw)?;
        if let Some(cache) = &self.cache {
            cache.insert(prompt, raw);
        }
        Ok(parsed)
    }
}

/// Search-phrase outcome that must not reach the cache.
enum QueryError {
    Backend(LlmError),
    Unusable,
}

impl From<LlmError> for QueryError {
    fn from(e: LlmError) -> Self {
        Self::Backend(e)
    }
}

fn image_options(kind: ComponentKind) -> ImageSearchOptions {
    match kind {
        ComponentKind::Hero => {
            ImageSearchOptions { orientation: Orientation::Landscape, size_hint: SizeHint::Full, max_results: 1 }
        }
        _ => ImageSearchOptions { orientation: Orientation::Squarish, size_hint: SizeHint::Regular, max_results: 1 },
    }
}

#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;
