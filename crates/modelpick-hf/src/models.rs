//! Internal API types for the `HuggingFace` Hub.
//!
//! These types are internal to `modelpick-hf` and are not exposed to
//! consumers. External consumers use the port DTOs defined in
//! `modelpick-core`.

use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the `HuggingFace` client.
#[derive(Debug, Clone)]
pub struct HfConfig {
    /// Base URL of the models API (default: <https://huggingface.co/api/models>)
    pub base_url: Url,
    /// Optional authentication token for gated models
    pub token: Option<String>,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

#[cfg(test)]
impl Default for HfConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://huggingface.co/api/models")
                .expect("default HF API URL is valid"),
            token: None,
            max_retries: 3,
            retry_base_delay_ms: 500,
            timeout_secs: 30,
            user_agent: "modelpick-hf/test".to_string(),
        }
    }
}

// ============================================================================
// Repository Reference
// ============================================================================

/// Reference to a `HuggingFace` repository.
///
/// Canonical ids are `owner/name`; a handful of legacy repositories still
/// answer to a bare `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HfRepoRef {
    /// Repository owner (user or organization)
    pub owner: Option<String>,
    /// Repository name
    pub name: String,
}

impl HfRepoRef {
    /// Parse a repository reference from a model ID string.
    pub fn parse(model_id: &str) -> Option<Self> {
        let model_id = model_id.trim();
        match model_id.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Some(Self {
                    owner: Some(owner.to_string()),
                    name: name.to_string(),
                })
            }
            None if !model_id.is_empty() => Some(Self {
                owner: None,
                name: model_id.to_string(),
            }),
            _ => None,
        }
    }

    /// Get the full model ID.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for HfRepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "{owner}/{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Sort field options for the models listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HfSortField {
    /// Sort by download count (default)
    #[default]
    Downloads,
    /// Sort by number of likes
    Likes,
    /// Sort by recent trending score
    Trending,
}

impl HfSortField {
    /// Get the API parameter value for this sort field.
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::Downloads => "downloads",
            Self::Likes => "likes",
            Self::Trending => "trendingScore",
        }
    }
}

/// Query parameters for a ranked models listing. Always descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HfListQuery {
    /// Task filter (e.g., `text-generation`)
    pub pipeline_tag: Option<String>,
    /// Library filter (e.g., `transformers`)
    pub library: Option<String>,
    /// Sort field (default: downloads)
    pub sort_by: HfSortField,
    /// Number of entries to request
    pub limit: u32,
}

/// One entry of a models listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HfModelListing {
    pub id: String,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
}

// ============================================================================
// Model Info
// ============================================================================

/// LFS pointer metadata attached to large files.
#[derive(Debug, Clone, Deserialize)]
pub struct HfLfs {
    pub size: Option<u64>,
}

/// One file of a repository as listed in the model info response.
#[derive(Debug, Clone, Deserialize)]
pub struct HfSibling {
    /// Path relative to repository root
    pub rfilename: String,
    /// Size in bytes, present when requested with `blobs=true`
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub lfs: Option<HfLfs>,
}

impl HfSibling {
    /// Reported file size, falling back to the LFS pointer size.
    pub fn size_bytes(&self) -> Option<u64> {
        self.size
            .or_else(|| self.lfs.as_ref().and_then(|lfs| lfs.size))
    }
}

/// Metadata for a single model repository.
#[derive(Debug, Clone)]
pub struct HfModelInfo {
    pub id: String,
    pub siblings: Option<Vec<HfSibling>>,
    /// `config.model_type`
    pub model_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hf_config_default() {
        let config = HfConfig::default();
        assert_eq!(
            config.base_url.as_str(),
            "https://huggingface.co/api/models"
        );
        assert!(config.token.is_none());
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_hf_repo_ref_parse() {
        let repo = HfRepoRef::parse("Qwen/Qwen2-0.5B").unwrap();
        assert_eq!(repo.owner.as_deref(), Some("Qwen"));
        assert_eq!(repo.name, "Qwen2-0.5B");
        assert_eq!(repo.id(), "Qwen/Qwen2-0.5B");

        let legacy = HfRepoRef::parse("gpt2").unwrap();
        assert_eq!(legacy.owner, None);
        assert_eq!(legacy.id(), "gpt2");
    }

    #[test]
    fn test_hf_repo_ref_parse_invalid() {
        assert!(HfRepoRef::parse("/no-owner").is_none());
        assert!(HfRepoRef::parse("no-name/").is_none());
        assert!(HfRepoRef::parse("a/b/c").is_none());
        assert!(HfRepoRef::parse("").is_none());
    }

    #[test]
    fn test_hf_sort_field_api_param() {
        assert_eq!(HfSortField::Downloads.as_api_param(), "downloads");
        assert_eq!(HfSortField::Likes.as_api_param(), "likes");
        assert_eq!(HfSortField::Trending.as_api_param(), "trendingScore");
    }

    #[test]
    fn test_sibling_size_falls_back_to_lfs() {
        let sibling: HfSibling = serde_json::from_value(serde_json::json!({
            "rfilename": "model.safetensors",
            "lfs": {"size": 4096, "sha256": "abc"}
        }))
        .unwrap();
        assert_eq!(sibling.size_bytes(), Some(4096));

        let sibling: HfSibling =
            serde_json::from_value(serde_json::json!({"rfilename": "README.md"})).unwrap();
        assert_eq!(sibling.size_bytes(), None);
    }
}
