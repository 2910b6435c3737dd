//! Error types for catalog port operations.

use thiserror::Error;

/// Errors from catalog port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested model was not found.
    #[error("Model not found: {model_id}")]
    ModelNotFound {
        /// The model ID that wasn't found
        model_id: String,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Authentication required or failed.
    #[error("Authentication required for model: {model_id}")]
    AuthRequired {
        /// The model ID that requires auth
        model_id: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::ModelNotFound {
            model_id: "Qwen/Missing".to_string(),
        };
        assert!(err.to_string().contains("Qwen/Missing"));

        let err = CatalogError::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
    }
}
