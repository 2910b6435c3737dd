//! Ranked models listing.

use crate::error::HfResult;
use crate::http::HttpBackend;
use crate::models::{HfListQuery, HfModelListing};
use crate::parsing::parse_listing;
use crate::url::build_list_url;

use super::HfClient;

impl<B: HttpBackend> HfClient<B> {
    /// Fetch one page of the ranked listing, descending by `query.sort_by`.
    pub(crate) async fn fetch_listing(&self, query: &HfListQuery) -> HfResult<Vec<HfModelListing>> {
        let url = build_list_url(&self.config, query);
        tracing::debug!(%url, "Listing models");

        let json_array: Vec<serde_json::Value> = self.backend.get_json(&url).await?;
        let listing = parse_listing(&json_array);

        tracing::debug!(
            received = json_array.len(),
            usable = listing.len(),
            "Parsed models listing"
        );
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::HfClient;
    use crate::http::testing::FakeBackend;
    use crate::models::{HfConfig, HfListQuery, HfSortField};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_listing_preserves_order() {
        let backend = FakeBackend::new().with_json(
            "sort=likes",
            json!([
                {"id": "org/most-liked", "likes": 900},
                {"id": "org/second", "likes": 800}
            ]),
        );
        let client = HfClient::with_backend(HfConfig::default(), backend);

        let query = HfListQuery {
            sort_by: HfSortField::Likes,
            limit: 2,
            ..Default::default()
        };
        let listing = client.fetch_listing(&query).await.unwrap();

        let ids: Vec<&str> = listing.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["org/most-liked", "org/second"]);
        assert_eq!(client.backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_listing_rejects_non_array() {
        let backend = FakeBackend::new().with_json("api/models", json!({"error": "nope"}));
        let client = HfClient::with_backend(HfConfig::default(), backend);

        let result = client.fetch_listing(&HfListQuery::default()).await;
        assert!(result.is_err());
    }
}
