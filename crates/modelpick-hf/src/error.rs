//! Error types for `HuggingFace` operations.
//!
//! These errors stay inside `modelpick-hf` except at client construction;
//! catalog calls map them to core port errors at the boundary.

use thiserror::Error;

/// Result type alias for `HuggingFace` operations.
pub type HfResult<T> = Result<T, HfError>;

/// Errors related to `HuggingFace` API operations.
#[derive(Debug, Error)]
pub enum HfError {
    /// API request failed with an HTTP error status.
    #[error("HuggingFace API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from HuggingFace API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The requested model was not found.
    #[error("Model '{model_id}' not found on HuggingFace")]
    ModelNotFound {
        /// The model ID that was not found
        model_id: String,
    },

    /// A model ID that is not of the form `owner/name`.
    #[error("Invalid model ID format: {model_id}")]
    InvalidModelId {
        /// The rejected model ID
        model_id: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
