//! Unsplash search API client.
//!
//! Thin HTTP wrapper for `GET /search/photos`. Pure parsing in
//! `parse_search_response` for testability.

use std::time::Duration;

use serde::Deserialize;

use super::{ImageError, ImageLookup, ImageSearchOptions, SizeHint};
use crate::llm::config::parse_or;

pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
const DEFAULT_IMAGE_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashConfig {
    pub access_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl UnsplashConfig {
    /// Build config from `UNSPLASH_ACCESS_KEY` (required), `UNSPLASH_BASE_URL`
    /// and `IMAGE_REQUEST_TIMEOUT_SECS` (default 15).
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::MissingApiKey`] when the access key is unset.
    pub fn from_env() -> Result<Self, ImageError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup. Blank values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::MissingApiKey`] when the access key is unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ImageError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_key =
            get("UNSPLASH_ACCESS_KEY").ok_or_else(|| ImageError::MissingApiKey { var: "UNSPLASH_ACCESS_KEY".into() })?;
        let base_url = get("UNSPLASH_BASE_URL")
            .map_or_else(|| DEFAULT_UNSPLASH_BASE_URL.to_owned(), |url| url.trim().trim_end_matches('/').to_owned());
        let request_timeout_secs = parse_or(get("IMAGE_REQUEST_TIMEOUT_SECS"), DEFAULT_IMAGE_REQUEST_TIMEOUT_SECS);
        Ok(Self { access_key, base_url, request_timeout_secs })
    }
}

pub struct UnsplashClient {
    http: reqwest::Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    /// # Errors
    ///
    /// Returns [`ImageError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: UnsplashConfig) -> Result<Self, ImageError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ImageError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, access_key: config.access_key, base_url: config.base_url })
    }
}

#[async_trait::async_trait]
impl ImageLookup for UnsplashClient {
    async fn find(&self, query: &str, options: &ImageSearchOptions) -> Result<Option<String>, ImageError> {
        let per_page = options.max_results.max(1).to_string();
        let response = self
            .http
            .get(format!("{}/search/photos", self.base_url))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .query(&[("query", query), ("orientation", options.orientation.as_str()), ("per_page", per_page.as_str())])
            .send()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;
        if status != 200 {
            return Err(ImageError::Response { status, body: text });
        }

        parse_search_response(&text, options.size_hint)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Deserialize)]
struct PhotoUrls {
    #[serde(default)]
    small: Option<String>,
    #[serde(default)]
    regular: Option<String>,
    #[serde(default)]
    full: Option<String>,
}

fn parse_search_response(json: &str, size: SizeHint) -> Result<Option<String>, ImageError> {
    let resp: SearchResponse = serde_json::from_str(json).map_err(|e| ImageError::Parse(e.to_string()))?;
    let Some(photo) = resp.results.into_iter().next() else {
        return Ok(None);
    };
    let PhotoUrls { small, regular, full } = photo.urls;
    let url = match size {
        SizeHint::Small => small.or(regular).or(full),
        SizeHint::Regular => regular.or(full).or(small),
        SizeHint::Full => full.or(regular).or(small),
    };
    Ok(url)
}

#[cfg(test)]
#[path = "unsplash_test.rs"]
mod tests;
