//! Raw candidate metadata as delivered by a catalog adapter.
//!
//! Every field the evaluator queries is declared here with an explicit
//! present/absent state. Adapters fill this structure once at the boundary;
//! the evaluator never probes the hub's response shape itself.

use serde::{Deserialize, Serialize};

/// Root-level configuration file the packaging tool needs for auto-detection.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// One file in a repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoFile {
    /// Path relative to the repository root.
    pub rfilename: String,
    /// Size in bytes, when the hub reported one.
    pub size: Option<u64>,
}

impl RepoFile {
    pub fn new(rfilename: impl Into<String>) -> Self {
        Self {
            rfilename: rfilename.into(),
            size: None,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Fixed-shape metadata for one candidate repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModelInfo {
    /// Repository identifier (`owner/name`).
    pub id: String,
    /// File listing, absent when the hub did not return one.
    pub siblings: Option<Vec<RepoFile>>,
    /// `model_type` from the repository's configuration.
    pub model_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
}

impl RawModelInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_siblings(mut self, siblings: Vec<RepoFile>) -> Self {
        self.siblings = Some(siblings);
        self
    }

    #[must_use]
    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = Some(model_type.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = Some(downloads);
        self
    }

    #[must_use]
    pub const fn with_likes(mut self, likes: u64) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Listed files, empty when the listing is absent.
    pub fn files(&self) -> &[RepoFile] {
        self.siblings.as_deref().unwrap_or(&[])
    }

    /// Whether `config.json` sits at the repository root.
    pub fn has_root_config(&self) -> bool {
        self.files().iter().any(|f| f.rfilename == CONFIG_FILE_NAME)
    }

    /// Sum of all reported file sizes.
    ///
    /// Returns `None` when no file reported a size, so that a missing
    /// listing is "unknown" rather than "zero bytes".
    pub fn total_size_bytes(&self) -> Option<u64> {
        let total = self
            .files()
            .iter()
            .filter_map(|f| f.size)
            .fold(0u64, u64::saturating_add);
        (total > 0).then_some(total)
    }
}

/// One entry of a ranked catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    /// Repository identifier (`owner/name`).
    pub id: String,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
}

impl CatalogListing {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            downloads: None,
            likes: None,
        }
    }
}
