use thiserror::Error;

#[derive(Debug, Error)]
pub enum TldrError {
    /// Bad input handed to the summarizer. Raised before any request is sent.
    #[error("{0}")]
    ValidationError(String),

    #[error("Failed to reach the Gemini API: {0}")]
    NetworkError(String),

    /// The endpoint answered, but with a failure status, an error object or no usable text.
    #[error("{0}")]
    ApiError(String),

    #[error("Failed to access plugin settings: {0}")]
    SettingsError(String),
}

impl From<reqwest::Error> for TldrError {
    fn from(error: reqwest::Error) -> Self {
        TldrError::NetworkError(error.to_string())
    }
}

impl From<std::io::Error> for TldrError {
    fn from(error: std::io::Error) -> Self {
        TldrError::SettingsError(error.to_string())
    }
}
