use serde::{Deserialize, Serialize};

use super::config::SummaryLength;
use crate::errors::TldrError;

/// Zero-based position inside a note. `ch` counts characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub ch: usize,
}

impl CursorPosition {
    #[must_use]
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// Start of the document.
    #[must_use]
    pub const fn origin() -> Self {
        Self { line: 0, ch: 0 }
    }
}

/// A validated summarization input.
#[derive(Debug, Clone)]
pub struct SummarizationRequest<'a> {
    pub document_text: &'a str,
    pub api_key: &'a str,
    pub length: SummaryLength,
}

impl<'a> SummarizationRequest<'a> {
    /// # Errors
    ///
    /// Returns `ValidationError` when the key is empty or the text is blank.
    pub fn new(
        document_text: &'a str,
        api_key: &'a str,
        length: SummaryLength,
    ) -> Result<Self, TldrError> {
        if api_key.is_empty() {
            return Err(TldrError::ValidationError(
                "API key is required".to_string(),
            ));
        }
        if document_text.trim().is_empty() {
            return Err(TldrError::ValidationError(
                "Note content is empty".to_string(),
            ));
        }

        Ok(Self {
            document_text,
            api_key,
            length,
        })
    }
}
