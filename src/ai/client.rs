//! LLM (Gemini) API client module
//!
//! Encapsulates all LLM API interactions for generating TLDR summaries.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::cleanup::{Diagnostics, TracingDiagnostics, clean_bullets};
use super::prompt_builder::{
    KEY_CHECK_MAX_OUTPUT_TOKENS, KEY_CHECK_PROMPT, build_prompt, max_output_tokens,
};
use super::transport::{HttpResponse, ReqwestTransport, Transport};
use super::wire::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::core::config::SummaryLength;
use crate::core::models::SummarizationRequest;
use crate::errors::TldrError;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Anything that can turn a note into TLDR bullets.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `ValidationError` for bad input, `NetworkError` for transport
    /// failures and `ApiError` for anything the endpoint rejects or leaves empty.
    async fn summarize(
        &self,
        content: &str,
        api_key: &str,
        length: SummaryLength,
    ) -> Result<Vec<String>, TldrError>;
}

/// Gemini `generateContent` client.
pub struct LlmClient<T: Transport = ReqwestTransport> {
    transport: T,
    base_url: String,
    model_name: String,
    diagnostics: Arc<dyn Diagnostics>,
}

impl LlmClient<ReqwestTransport> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for LlmClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> LlmClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: GEMINI_API_BASE.to_string(),
            model_name: DEFAULT_MODEL.to_string(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    /// Generates TLDR bullets for `content`.
    ///
    /// # Errors
    ///
    /// Fails before any request with `ValidationError` if the key is empty or the
    /// content is blank. See [`Summarizer::summarize`] for the remaining cases.
    pub async fn generate_tldr(
        &self,
        content: &str,
        api_key: &str,
        length: SummaryLength,
    ) -> Result<Vec<String>, TldrError> {
        let request = SummarizationRequest::new(content, api_key, length)?;

        let prompt = build_prompt(request.document_text, request.length);

        #[cfg(feature = "debug-logs")]
        debug!("Using Gemini prompt:\n{}", prompt);

        info!(
            model = %self.model_name,
            tldr_length = %request.length,
            content_chars = request.document_text.chars().count(),
            "Generating TLDR"
        );

        let body = GenerateContentRequest::single_turn(
            prompt,
            GenerationConfig::summary(max_output_tokens(request.length)),
        );
        let body = serde_json::to_value(&body)
            .map_err(|e| TldrError::ApiError(format!("Failed to encode request: {e}")))?;

        let response = self
            .transport
            .post_json(&self.endpoint(), request.api_key, &body)
            .await?;

        let text = extract_text(&response)?;
        let bullets = clean_bullets(&text, self.diagnostics.as_ref());
        if bullets.is_empty() {
            return Err(TldrError::ApiError("empty response from API".to_string()));
        }

        info!(bullets = bullets.len(), "TLDR generated");
        Ok(bullets)
    }

    /// Sends a tiny request to check whether `api_key` is accepted.
    ///
    /// Never fails: any problem is logged and reported as `false`.
    pub async fn test_api_key(&self, api_key: &str) -> bool {
        if api_key.is_empty() {
            return false;
        }

        let body = GenerateContentRequest::single_turn(
            KEY_CHECK_PROMPT,
            GenerationConfig::capped(KEY_CHECK_MAX_OUTPUT_TOKENS),
        );
        let body = match serde_json::to_value(&body) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to encode API key check request");
                return false;
            }
        };

        match self.transport.post_json(&self.endpoint(), api_key, &body).await {
            Ok(response) if response.is_success() => {
                let parsed: GenerateContentResponse =
                    serde_json::from_str(&response.body).unwrap_or_default();
                parsed.has_candidates()
            }
            Ok(response) => {
                error!(
                    status = response.status,
                    body = %response.body,
                    "API key check rejected"
                );
                false
            }
            Err(e) => {
                error!(error = %e, "API key check failed");
                false
            }
        }
    }
}

#[async_trait]
impl<T: Transport> Summarizer for LlmClient<T> {
    async fn summarize(
        &self,
        content: &str,
        api_key: &str,
        length: SummaryLength,
    ) -> Result<Vec<String>, TldrError> {
        self.generate_tldr(content, api_key, length).await
    }
}

/// Classifies a raw response and pulls out the first candidate's text.
///
/// # Errors
///
/// Returns `ApiError` for failure statuses, in-body error objects, missing
/// candidates and empty text.
pub fn extract_text(response: &HttpResponse) -> Result<String, TldrError> {
    if !response.is_success() {
        let message = ErrorEnvelope::message_from(&response.body).unwrap_or_else(|| {
            format!(
                "API request failed with status {}: {}",
                response.status,
                response.reason.as_deref().unwrap_or("Unknown status")
            )
        });
        warn!(status = response.status, %message, "Gemini API returned an error status");
        return Err(TldrError::ApiError(message));
    }

    let parsed: GenerateContentResponse = serde_json::from_str(&response.body)
        .map_err(|e| TldrError::ApiError(format!("Failed to parse API response: {e}")))?;

    if let Some(err) = parsed.error.as_ref() {
        let message = err
            .message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Unknown API error".to_string());
        warn!(code = ?err.code, %message, "Gemini API reported an error");
        return Err(TldrError::ApiError(message));
    }

    if !parsed.has_candidates() {
        return Err(TldrError::ApiError("no response from API".to_string()));
    }

    if let Some(reason) = parsed
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.finish_reason.as_deref())
    {
        debug!(finish_reason = reason, "Gemini candidate finished");
    }

    match parsed.first_text() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(TldrError::ApiError("empty response from API".to_string())),
    }
}
