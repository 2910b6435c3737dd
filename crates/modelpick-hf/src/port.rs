//! `ModelCatalogPort` implementation for `HfClient`.
//!
//! Converts between internal `HuggingFace` types and core DTOs, and maps
//! `HfError` to `CatalogError`.

use async_trait::async_trait;
use modelpick_core::{
    CatalogError, CatalogListing, CatalogQuery, CatalogResult, ModelCatalogPort, RawModelInfo,
    RepoFile, SortKey,
};

use crate::client::HfClient;
use crate::error::HfError;
use crate::http::HttpBackend;
use crate::models::{HfListQuery, HfModelInfo, HfModelListing, HfSortField};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HfError` to core `CatalogError`.
fn map_error(err: HfError) -> CatalogError {
    match err {
        HfError::ApiRequestFailed { status, url } => match status {
            404 => CatalogError::ModelNotFound {
                model_id: extract_model_id_from_url(&url),
            },
            401 | 403 => CatalogError::AuthRequired {
                model_id: extract_model_id_from_url(&url),
            },
            429 => CatalogError::RateLimited,
            _ => CatalogError::Network {
                message: format!("API request failed with status {status}: {url}"),
            },
        },
        HfError::ModelNotFound { model_id } => CatalogError::ModelNotFound { model_id },
        HfError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
        HfError::InvalidModelId { model_id } => CatalogError::InvalidResponse {
            message: format!("Invalid model ID format: {model_id}"),
        },
        HfError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        HfError::InvalidUrl(e) => CatalogError::Configuration {
            message: e.to_string(),
        },
        HfError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Extract model ID from a `HuggingFace` API URL.
fn extract_model_id_from_url(url: &str) -> String {
    // URLs look like: https://huggingface.co/api/models/Qwen/Qwen2-0.5B?blobs=true
    url.split_once("/api/models/")
        .map(|(_, rest)| rest.split(['?', '#']).next().unwrap_or(rest))
        .filter(|id| !id.is_empty())
        .map_or_else(|| url.to_string(), str::to_string)
}

// ============================================================================
// Type Conversions
// ============================================================================

const fn to_sort_field(sort: SortKey) -> HfSortField {
    match sort {
        SortKey::Downloads => HfSortField::Downloads,
        SortKey::Likes => HfSortField::Likes,
        SortKey::Trending => HfSortField::Trending,
    }
}

/// Convert core `CatalogQuery` to internal `HfListQuery`.
fn to_list_query(query: &CatalogQuery) -> HfListQuery {
    HfListQuery {
        pipeline_tag: query.task.clone(),
        library: query.library.clone(),
        sort_by: to_sort_field(query.sort),
        limit: query.limit,
    }
}

fn to_listing(entry: HfModelListing) -> CatalogListing {
    CatalogListing {
        id: entry.id,
        downloads: entry.downloads,
        likes: entry.likes,
    }
}

/// Convert internal `HfModelInfo` to core `RawModelInfo`.
fn to_raw_info(info: HfModelInfo) -> RawModelInfo {
    RawModelInfo {
        id: info.id,
        siblings: info.siblings.map(|siblings| {
            siblings
                .into_iter()
                .map(|sibling| RepoFile {
                    size: sibling.size_bytes(),
                    rfilename: sibling.rfilename,
                })
                .collect()
        }),
        model_type: info.model_type,
        tags: info.tags,
        downloads: info.downloads,
        likes: info.likes,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ModelCatalogPort for HfClient<B> {
    async fn list_models(&self, query: &CatalogQuery) -> CatalogResult<Vec<CatalogListing>> {
        let listing = self
            .fetch_listing(&to_list_query(query))
            .await
            .map_err(map_error)?;

        Ok(listing.into_iter().map(to_listing).collect())
    }

    async fn model_info(&self, model_id: &str) -> CatalogResult<RawModelInfo> {
        self.fetch_model_info(model_id)
            .await
            .map(to_raw_info)
            .map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use crate::models::HfConfig;
    use modelpick_core::{
        CompatibilityEvaluator, SelectionParams, TopModelSelector, WeightFormat,
    };
    use serde_json::json;
    use std::sync::Arc;

    const GB: u64 = 1024 * 1024 * 1024;

    fn client(backend: FakeBackend) -> HfClient<FakeBackend> {
        HfClient::with_backend(HfConfig::default(), backend)
    }

    #[test]
    fn test_map_error_statuses() {
        let url = "https://huggingface.co/api/models/org/gated?blobs=true".to_string();

        let err = map_error(HfError::ApiRequestFailed {
            status: 403,
            url: url.clone(),
        });
        assert!(matches!(err, CatalogError::AuthRequired { ref model_id } if model_id == "org/gated"));

        let err = map_error(HfError::ApiRequestFailed {
            status: 404,
            url: url.clone(),
        });
        assert!(matches!(err, CatalogError::ModelNotFound { ref model_id } if model_id == "org/gated"));

        let err = map_error(HfError::ApiRequestFailed {
            status: 429,
            url: url.clone(),
        });
        assert!(matches!(err, CatalogError::RateLimited));

        let err = map_error(HfError::ApiRequestFailed { status: 502, url });
        assert!(matches!(err, CatalogError::Network { .. }));
    }

    #[test]
    fn test_extract_model_id_from_url() {
        assert_eq!(
            extract_model_id_from_url("https://huggingface.co/api/models/Qwen/Qwen2-0.5B?blobs=true"),
            "Qwen/Qwen2-0.5B"
        );
        assert_eq!(
            extract_model_id_from_url("https://huggingface.co/api/models?sort=likes"),
            "https://huggingface.co/api/models?sort=likes"
        );
    }

    #[tokio::test]
    async fn test_list_models_translates_query() {
        let backend = FakeBackend::new().with_json(
            "api/models?",
            json!([{"id": "org/a", "downloads": 5}]),
        );
        let client = client(backend);

        let query = CatalogQuery::new(SortKey::Trending, 40)
            .with_task("text-generation")
            .with_library("transformers");
        let listing = client.list_models(&query).await.unwrap();

        assert_eq!(listing, [CatalogListing {
            id: "org/a".to_string(),
            downloads: Some(5),
            likes: None,
        }]);

        let requests = client.backend.requests();
        assert!(requests[0].contains("pipeline_tag=text-generation"));
        assert!(requests[0].contains("library=transformers"));
        assert!(requests[0].contains("sort=trendingScore"));
        assert!(requests[0].contains("limit=40"));
    }

    #[tokio::test]
    async fn test_model_info_maps_sizes_and_config() {
        let backend = FakeBackend::new().with_json(
            "org/a?blobs=true",
            json!({
                "id": "org/a",
                "config": {"model_type": "llama"},
                "siblings": [
                    {"rfilename": "config.json", "size": 700},
                    {"rfilename": "model.safetensors", "lfs": {"size": 2048}}
                ]
            }),
        );
        let client = client(backend);

        let info = client.model_info("org/a").await.unwrap();

        assert_eq!(info.model_type.as_deref(), Some("llama"));
        assert!(info.has_root_config());
        assert_eq!(info.total_size_bytes(), Some(2748));
    }

    #[tokio::test]
    async fn test_gated_model_maps_to_auth_required() {
        let client = client(FakeBackend::new().with_status("org/gated", 401));

        let result = client.model_info("org/gated").await;
        assert!(matches!(result, Err(CatalogError::AuthRequired { .. })));
    }

    #[tokio::test]
    async fn test_selector_over_fake_hub() {
        let backend = FakeBackend::new()
            .with_json(
                "api/models?",
                json!([
                    {"id": "org/gated-7b", "downloads": 300},
                    {"id": "org/no-config-1b", "downloads": 200},
                    {"id": "Qwen/Qwen2-0.5B", "downloads": 100, "likes": 4}
                ]),
            )
            .with_status("org/gated-7b", 403)
            .with_json(
                "org/no-config-1b?blobs=true",
                json!({"siblings": [{"rfilename": "model.safetensors", "size": 10}]}),
            )
            .with_json(
                "Qwen/Qwen2-0.5B?blobs=true",
                json!({
                    "id": "Qwen/Qwen2-0.5B",
                    "tags": ["qwen2"],
                    "siblings": [
                        {"rfilename": "config.json", "size": 661},
                        {"rfilename": "model.safetensors", "size": GB}
                    ]
                }),
            );

        let selector = TopModelSelector::new(
            Arc::new(client(backend)),
            CompatibilityEvaluator::default(),
        );
        let outcome = selector
            .select_top(&SelectionParams::default().with_limit(2))
            .await
            .unwrap();

        assert_eq!(outcome.selected.len(), 1);
        let descriptor = &outcome.selected[0];
        assert_eq!(descriptor.id(), "Qwen/Qwen2-0.5B");
        assert_eq!(descriptor.family(), "qwen2");
        assert_eq!(descriptor.format(), WeightFormat::Safetensors);
        assert_eq!(descriptor.size_gb(), Some(1.0));
        assert_eq!(descriptor.downloads(), 100);
        assert_eq!(descriptor.likes(), 4);

        let codes: Vec<&str> = outcome.rejected.iter().map(|r| r.reason.code()).collect();
        assert_eq!(codes, ["metadata_unavailable", "missing_config"]);
    }
}
