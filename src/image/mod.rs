//! Image lookup — stock-photo search used to decorate generated sections.
//!
//! DESIGN
//! ======
//! The pipeline depends on the [`ImageLookup`] capability only. Lookups are
//! strictly best-effort: callers downgrade every [`ImageError`] to "no image".

pub mod unsplash;

pub use unsplash::{UnsplashClient, UnsplashConfig};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("missing image API key: env var {var} not set")]
    MissingApiKey { var: String },
    #[error("image search request failed: {0}")]
    Request(String),
    #[error("image search response error: status {status}")]
    Response { status: u16, body: String },
    #[error("image search response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl crate::error::ErrorCode for ImageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey { .. } => "E_MISSING_IMAGE_KEY",
            Self::Request(_) => "E_IMAGE_REQUEST",
            Self::Response { .. } => "E_IMAGE_RESPONSE",
            Self::Parse(_) => "E_IMAGE_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// SEARCH OPTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Squarish => "squarish",
        }
    }
}

/// Rendition size the caller intends to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeHint {
    Small,
    #[default]
    Regular,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSearchOptions {
    pub orientation: Orientation,
    pub size_hint: SizeHint,
    pub max_results: u8,
}

impl Default for ImageSearchOptions {
    fn default() -> Self {
        Self { orientation: Orientation::Landscape, size_hint: SizeHint::Regular, max_results: 1 }
    }
}

// =============================================================================
// LOOKUP TRAIT
// =============================================================================

/// Image search backend. Returns the URL of the best match, if any.
#[async_trait::async_trait]
pub trait ImageLookup: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ImageError`] when the search backend cannot be reached or
    /// answers with something unusable.
    async fn find(&self, query: &str, options: &ImageSearchOptions) -> Result<Option<String>, ImageError>;
}

/// Lookup used when no image backend is configured. Always finds nothing.
pub struct NoImages;

#[async_trait::async_trait]
impl ImageLookup for NoImages {
    async fn find(&self, _query: &str, _options: &ImageSearchOptions) -> Result<Option<String>, ImageError> {
        Ok(None)
    }
}
