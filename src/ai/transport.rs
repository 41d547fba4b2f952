//! HTTP seam between the Gemini client and the network.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::TldrError;

/// Header carrying the caller's Gemini API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Raw HTTP outcome. Interpreting it is the client's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, if known.
    pub reason: Option<String>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` as JSON to `url`, authenticating with `api_key`.
    ///
    /// Only transport-level failures are errors; any HTTP status is returned as a
    /// response.
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &Value,
    ) -> Result<HttpResponse, TldrError>;
}

/// `reqwest`-backed transport. Uses the client's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &Value,
    ) -> Result<HttpResponse, TldrError> {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to make http request"))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            TldrError::NetworkError(format!(
                "Failed to read response body (status {status}): {e}"
            ))
        })?;
        debug!(status = status.as_u16(), bytes = body.len(), "Gemini API responded");

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}
