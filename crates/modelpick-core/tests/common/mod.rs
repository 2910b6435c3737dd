//! Shared fixtures for modelpick-core integration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use modelpick_core::{
    CatalogError, CatalogListing, CatalogQuery, CatalogResult, ModelCatalogPort, RawModelInfo,
    RepoFile,
};

pub const GB: u64 = 1024 * 1024 * 1024;

/// In-memory catalog serving candidates in insertion (rank) order.
#[derive(Default)]
pub struct StubCatalog {
    ranked: Vec<RawModelInfo>,
    failing: Vec<String>,
    lookups: Mutex<Vec<String>>,
    queries: Mutex<Vec<CatalogQuery>>,
}

impl StubCatalog {
    pub fn new(ranked: Vec<RawModelInfo>) -> Self {
        Self {
            ranked,
            ..Self::default()
        }
    }

    /// Make per-model lookups for `model_id` fail with a network error.
    #[must_use]
    pub fn with_failing(mut self, model_id: &str) -> Self {
        self.failing.push(model_id.to_string());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelCatalogPort for StubCatalog {
    async fn list_models(&self, query: &CatalogQuery) -> CatalogResult<Vec<CatalogListing>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self
            .ranked
            .iter()
            .take(query.limit as usize)
            .map(|info| CatalogListing::new(info.id.as_str()))
            .collect())
    }

    async fn model_info(&self, model_id: &str) -> CatalogResult<RawModelInfo> {
        self.lookups.lock().unwrap().push(model_id.to_string());
        if self.failing.iter().any(|id| id == model_id) {
            return Err(CatalogError::Network {
                message: "connection reset".to_string(),
            });
        }

        let by_id: HashMap<&str, &RawModelInfo> =
            self.ranked.iter().map(|info| (info.id.as_str(), info)).collect();
        by_id
            .get(model_id)
            .map(|info| (*info).clone())
            .ok_or_else(|| CatalogError::ModelNotFound {
                model_id: model_id.to_string(),
            })
    }
}

/// A candidate that passes every compatibility check.
pub fn compatible(id: &str, size_bytes: u64) -> RawModelInfo {
    RawModelInfo::new(id).with_siblings(vec![
        RepoFile::new("config.json").with_size(700),
        RepoFile::new("model.safetensors").with_size(size_bytes),
    ])
}

/// A candidate with weights but no root `config.json`.
pub fn without_config(id: &str) -> RawModelInfo {
    RawModelInfo::new(id).with_siblings(vec![
        RepoFile::new("model.safetensors").with_size(GB),
        RepoFile::new("README.md").with_size(100),
    ])
}
