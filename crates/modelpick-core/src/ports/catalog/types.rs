//! Core-owned DTOs for catalog queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking criterion for the candidate listing. Always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Total download count (default)
    #[default]
    Downloads,
    /// Number of likes
    Likes,
    /// Recent popularity
    Trending,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Downloads => "downloads",
            Self::Likes => "likes",
            Self::Trending => "trending",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "downloads" => Ok(Self::Downloads),
            "likes" => Ok(Self::Likes),
            "trending" => Ok(Self::Trending),
            other => Err(format!(
                "unknown sort key '{other}' (expected downloads, likes or trending)"
            )),
        }
    }
}

/// Parameters for a ranked listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Ranking criterion
    pub sort: SortKey,
    /// Task category filter (e.g., `text-generation`); `None` lists all tasks
    pub task: Option<String>,
    /// Library filter (e.g., `transformers`)
    pub library: Option<String>,
    /// Maximum number of entries to return
    pub limit: u32,
}

impl CatalogQuery {
    /// Create a query with no filters.
    pub const fn new(sort: SortKey, limit: u32) -> Self {
        Self {
            sort,
            task: None,
            library: None,
            limit,
        }
    }

    /// Set the task filter. Blank strings clear it.
    #[must_use]
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        let task = task.into();
        self.task = (!task.trim().is_empty()).then(|| task.trim().to_string());
        self
    }

    #[must_use]
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }
}
