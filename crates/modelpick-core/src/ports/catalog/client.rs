//! Model catalog port trait.

use super::error::CatalogResult;
use super::types::CatalogQuery;
use crate::domain::{CatalogListing, RawModelInfo};
use async_trait::async_trait;

/// Port trait for a remote model hub.
///
/// The selector receives an implementation by injection and never reaches
/// for a global client, so it can be exercised against a stub.
///
/// # Design
///
/// - Uses core-owned DTOs, not hub API types
/// - Returns `CatalogError` for all failures
/// - Calls are awaited one at a time by the selector; implementations need
///   not support overlapping requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelCatalogPort: Send + Sync {
    /// List candidate models ranked by `query.sort`, descending.
    ///
    /// Returns at most `query.limit` entries in rank order.
    async fn list_models(&self, query: &CatalogQuery) -> CatalogResult<Vec<CatalogListing>>;

    /// Fetch file listing (with sizes), config and popularity for one model.
    ///
    /// # Arguments
    ///
    /// * `model_id` - Full model ID (e.g., `Qwen/Qwen2-0.5B`)
    async fn model_info(&self, model_id: &str) -> CatalogResult<RawModelInfo>;
}
