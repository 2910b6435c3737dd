//! Packaging-compatibility evaluation for a single candidate.
//!
//! The evaluator is pure: it receives fixed-shape metadata and returns a
//! tagged outcome. Fetching metadata and logging rejections is the
//! selector's job.

use thiserror::Error;

use crate::domain::{
    CatalogDescriptor, FamilyVocabulary, RawModelInfo, RepoFile, UNKNOWN, WeightFormat,
    extract_param_size,
};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Why a candidate was not selected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("no config.json at repository root")]
    MissingConfig,

    #[error("no supported weight format")]
    NoSupportedFormat,

    #[error("too large ({size_gb:.2}GB > {max_size_gb}GB)")]
    TooLarge { size_gb: f64, max_size_gb: f64 },

    #[error("metadata unavailable: {message}")]
    MetadataUnavailable { message: String },
}

impl RejectReason {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingConfig => "missing_config",
            Self::NoSupportedFormat => "no_supported_format",
            Self::TooLarge { .. } => "too_large",
            Self::MetadataUnavailable { .. } => "metadata_unavailable",
        }
    }
}

/// Outcome of evaluating one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Accepted(CatalogDescriptor),
    Rejected(RejectReason),
}

/// Detect the highest-priority weight format present in a file listing.
///
/// Priority is taken over the whole listing, so a repository shipping both
/// `model.safetensors` and `pytorch_model.bin` resolves to safetensors no
/// matter which file is listed first.
pub fn detect_format(files: &[RepoFile]) -> Option<WeightFormat> {
    WeightFormat::DETECTION_ORDER
        .into_iter()
        .find(|format| files.iter().any(|f| format.matches_file(&f.rfilename)))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Decides whether a candidate can be packaged and builds its descriptor.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEvaluator {
    vocabulary: FamilyVocabulary,
}

impl CompatibilityEvaluator {
    pub const fn new(vocabulary: FamilyVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Evaluate one candidate against a size ceiling in GB.
    ///
    /// Checks run in order and the first failure wins: root `config.json`,
    /// supported weight format, then size. An unknown size passes. The
    /// ceiling is compared against the unrounded size.
    pub fn evaluate(&self, info: &RawModelInfo, max_size_gb: f64) -> Evaluation {
        if !info.has_root_config() {
            return Evaluation::Rejected(RejectReason::MissingConfig);
        }

        let Some(format) = detect_format(info.files()) else {
            return Evaluation::Rejected(RejectReason::NoSupportedFormat);
        };

        #[allow(clippy::cast_precision_loss)]
        let size_gb = info
            .total_size_bytes()
            .map(|bytes| bytes as f64 / BYTES_PER_GB);

        if let Some(size_gb) = size_gb.filter(|gb| *gb > max_size_gb) {
            return Evaluation::Rejected(RejectReason::TooLarge {
                size_gb,
                max_size_gb,
            });
        }

        let family = self.vocabulary.detect(info).unwrap_or(UNKNOWN).to_string();
        let param_size = extract_param_size(&info.id).unwrap_or_else(|| UNKNOWN.to_string());

        tracing::debug!(
            model_id = %info.id,
            %family,
            %format,
            %param_size,
            "Candidate is packaging-compatible"
        );

        Evaluation::Accepted(CatalogDescriptor::new(
            info.id.clone(),
            family,
            format,
            param_size,
            size_gb.map(round_to_hundredths),
            info.downloads.unwrap_or(0),
            info.likes.unwrap_or(0),
        ))
    }
}
