//! Per-model metadata lookup.

use crate::error::{HfError, HfResult};
use crate::http::HttpBackend;
use crate::models::{HfModelInfo, HfRepoRef};
use crate::parsing::parse_model_info;
use crate::url::build_model_info_url;

use super::HfClient;

impl<B: HttpBackend> HfClient<B> {
    /// Fetch file listing with sizes, config and popularity for one model.
    pub(crate) async fn fetch_model_info(&self, model_id: &str) -> HfResult<HfModelInfo> {
        let repo = HfRepoRef::parse(model_id).ok_or_else(|| HfError::InvalidModelId {
            model_id: model_id.to_string(),
        })?;

        let url = build_model_info_url(&self.config, &repo);
        tracing::debug!(%url, "Fetching model info");

        let json: serde_json::Value = self.backend.get_json(&url).await?;
        let mut info = parse_model_info(&json)?;
        if info.id.is_empty() {
            info.id = repo.id();
        }
        Ok(info)
    }
}
