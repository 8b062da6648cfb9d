//! HTTP plumbing shared by the provider clients.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::LlmError;

pub(crate) fn build_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Send `request` and return the raw body of a 2xx response. Any other
/// status becomes [`LlmError::ApiResponse`] carrying the body.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<String, LlmError> {
    let response = request
        .send()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

    if !status.is_success() {
        return Err(LlmError::ApiResponse { status: status.as_u16(), body });
    }
    Ok(body)
}

/// Decode a provider body into its wire type.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, LlmError> {
    serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))
}
