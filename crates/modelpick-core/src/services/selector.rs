//! Top-model selection over a ranked catalog listing.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::evaluator::{CompatibilityEvaluator, Evaluation, RejectReason};
use crate::domain::{CatalogDescriptor, CatalogListing, RawModelInfo};
use crate::ports::{CatalogError, CatalogQuery, ModelCatalogPort};
use crate::settings::{DEFAULT_LIBRARY, SelectionParams, SettingsError};

/// Candidates requested per descriptor wanted, since most candidates fail
/// the compatibility checks.
pub const OVERFETCH_MULTIPLIER: u32 = 10;

/// Top-level selection failure. Per-candidate failures never surface here.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Invalid selection parameters: {0}")]
    InvalidParameters(#[from] SettingsError),

    #[error("Failed to list candidate models: {0}")]
    Catalog(#[from] CatalogError),
}

/// A candidate that was checked and skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub model_id: String,
    pub reason: RejectReason,
}

/// Result of one selection run.
#[derive(Debug, Clone, Default)]
pub struct SelectionOutcome {
    /// Accepted descriptors in catalog rank order.
    pub selected: Vec<CatalogDescriptor>,
    /// Skipped candidates in the order they were checked.
    pub rejected: Vec<Rejection>,
    /// Number of candidates evaluated.
    pub checked: usize,
    /// The limit that was requested.
    pub requested: u32,
}

impl SelectionOutcome {
    /// Whether the run stopped because the listing ran out before `requested`
    /// descriptors were accepted.
    pub fn is_short(&self) -> bool {
        self.selected.len() < self.requested as usize
    }
}

/// Selects the top packaging-compatible models from a catalog.
pub struct TopModelSelector {
    catalog: Arc<dyn ModelCatalogPort>,
    evaluator: CompatibilityEvaluator,
}

impl TopModelSelector {
    /// Create a selector over the given catalog.
    pub fn new(catalog: Arc<dyn ModelCatalogPort>, evaluator: CompatibilityEvaluator) -> Self {
        Self { catalog, evaluator }
    }

    /// Build the single ranked listing request for a run.
    pub fn listing_query(params: &SelectionParams) -> CatalogQuery {
        CatalogQuery::new(
            params.sort,
            params.limit.saturating_mul(OVERFETCH_MULTIPLIER),
        )
        .with_task(params.task.as_str())
        .with_library(DEFAULT_LIBRARY)
    }

    /// Select up to `params.limit` descriptors in catalog rank order.
    ///
    /// Parameters are validated before the catalog is touched. A failing
    /// listing request fails the run; a failing per-model lookup only
    /// rejects that candidate.
    pub async fn select_top(
        &self,
        params: &SelectionParams,
    ) -> Result<SelectionOutcome, SelectionError> {
        params.validate()?;

        let query = Self::listing_query(params);
        info!(
            sort = %query.sort,
            task = ?query.task,
            candidates = query.limit,
            "Fetching candidate models"
        );

        let listings = self.catalog.list_models(&query).await?;
        let total = listings.len();
        let limit = params.limit as usize;
        debug!(total, "Received candidate listing");

        let mut outcome = SelectionOutcome {
            requested: params.limit,
            ..SelectionOutcome::default()
        };

        for (index, listing) in listings.into_iter().enumerate() {
            if outcome.selected.len() >= limit {
                break;
            }

            info!("Checking {}/{}: {}", index + 1, total, listing.id);
            outcome.checked += 1;

            let evaluation = match self.catalog.model_info(&listing.id).await {
                Ok(model_info) => self.evaluator.evaluate(
                    &with_listing_fallbacks(model_info, &listing),
                    params.max_size_gb,
                ),
                Err(e) => Evaluation::Rejected(RejectReason::MetadataUnavailable {
                    message: e.to_string(),
                }),
            };

            match evaluation {
                Evaluation::Accepted(descriptor) => {
                    outcome.selected.push(descriptor);
                    info!(
                        "Added {} ({}/{})",
                        listing.id,
                        outcome.selected.len(),
                        limit
                    );
                }
                Evaluation::Rejected(reason) => {
                    info!(
                        model_id = %listing.id,
                        reason = reason.code(),
                        "Skipping {}: {}",
                        listing.id,
                        reason
                    );
                    outcome.rejected.push(Rejection {
                        model_id: listing.id,
                        reason,
                    });
                }
            }
        }

        if outcome.is_short() {
            warn!(
                selected = outcome.selected.len(),
                requested = limit,
                checked = outcome.checked,
                "Candidate listing exhausted before reaching the limit"
            );
        }

        info!(
            "Selected {} models ({} rejected)",
            outcome.selected.len(),
            outcome.rejected.len()
        );

        Ok(outcome)
    }
}

/// Fill identity and popularity from the listing where the lookup lacks them.
fn with_listing_fallbacks(mut info: RawModelInfo, listing: &CatalogListing) -> RawModelInfo {
    if info.id.is_empty() {
        info.id.clone_from(&listing.id);
    }
    info.downloads = info.downloads.or(listing.downloads);
    info.likes = info.likes.or(listing.likes);
    info
}
