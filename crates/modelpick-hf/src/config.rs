//! Public configuration for the `HuggingFace` client.
//!
//! This module provides a stable public API for configuring the HF client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default Hub endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Path of the models API below the Hub endpoint.
const MODELS_API_PATH: &str = "/api/models";

/// Configuration for the `HuggingFace` client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use modelpick_hf::HfClientConfig;
/// use std::time::Duration;
///
/// let config = HfClientConfig::new()
///     .with_endpoint("https://hf-mirror.example.com/")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct HfClientConfig {
    /// Base URL of the models API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional authentication token for gated models
    pub(crate) token: Option<String>,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for HfClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{DEFAULT_ENDPOINT}{MODELS_API_PATH}"),
            user_agent: concat!("modelpick-hf/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl HfClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the models API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an access token will be sent.
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Set the full base URL of the models API.
    ///
    /// Defaults to `https://huggingface.co/api/models`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Point the client at a Hub endpoint (mirror or self-hosted Hub).
    ///
    /// The models API path is appended to the endpoint.
    #[must_use]
    pub fn with_endpoint(self, endpoint: &str) -> Self {
        let endpoint = endpoint.trim().trim_end_matches('/');
        self.with_base_url(format!("{endpoint}{MODELS_API_PATH}"))
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set an authentication token for gated models.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional authentication token. Blank tokens are ignored.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
