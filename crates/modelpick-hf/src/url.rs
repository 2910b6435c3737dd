//! URL construction helpers for the `HuggingFace` API.
//!
//! Pure functions, so every request the client sends can be checked in
//! tests without a network.

use crate::models::{HfConfig, HfListQuery, HfRepoRef};
use url::Url;

/// Largest page the models listing serves in one response.
pub const MAX_LIST_LIMIT: u32 = 1000;

/// Build a ranked listing URL. Results are always sorted descending.
pub fn build_list_url(config: &HfConfig, query: &HfListQuery) -> Url {
    let mut url = config.base_url.clone();

    let mut params = Vec::with_capacity(5);
    if let Some(ref tag) = query.pipeline_tag {
        params.push(format!("pipeline_tag={}", urlencoding::encode(tag)));
    }
    if let Some(ref library) = query.library {
        params.push(format!("library={}", urlencoding::encode(library)));
    }
    params.push(format!("sort={}", query.sort_by.as_api_param()));
    params.push("direction=-1".to_string());
    params.push(format!("limit={}", query.limit.clamp(1, MAX_LIST_LIMIT)));

    url.set_query(Some(&params.join("&")));
    url
}

/// Build a model info URL that includes per-file sizes.
pub fn build_model_info_url(config: &HfConfig, repo: &HfRepoRef) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{}", repo.id()));
    url.set_query(Some("blobs=true"));

    url
}
