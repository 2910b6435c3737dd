//! The packaging-ready model descriptor and its weight format enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel for fields that could not be detected.
pub const UNKNOWN: &str = "unknown";

/// Placeholder architecture. The packaging tool detects the real one from `config.json`.
pub const AUTO_DETECTED_ARCH: &str = "transformer";

/// On-disk weight serialization formats accepted by the packaging tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightFormat {
    /// `*.safetensors`
    Safetensors,
    /// `*.gguf`
    Gguf,
    /// `pytorch_model*.bin`
    Bin,
    /// `*.pt`
    Pt,
    /// `*.pth`
    Pth,
    /// `*.onnx`
    Onnx,
}

impl WeightFormat {
    /// Every supported format.
    pub const ALL: [Self; 6] = [
        Self::Safetensors,
        Self::Gguf,
        Self::Bin,
        Self::Pt,
        Self::Pth,
        Self::Onnx,
    ];

    /// Detection priority, highest first.
    ///
    /// A repository shipping several formats resolves to the first entry
    /// that any of its files matches.
    pub const DETECTION_ORDER: [Self; 6] = [
        Self::Safetensors,
        Self::Gguf,
        Self::Onnx,
        Self::Bin,
        Self::Pt,
        Self::Pth,
    ];

    /// Canonical lower-case name, as written to JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safetensors => "safetensors",
            Self::Gguf => "gguf",
            Self::Bin => "bin",
            Self::Pt => "pt",
            Self::Pth => "pth",
            Self::Onnx => "onnx",
        }
    }

    /// Check whether a repository file name belongs to this format.
    ///
    /// `.bin` files only count when they carry the `pytorch_model` marker,
    /// since plenty of unrelated artifacts share that extension.
    pub fn matches_file(self, filename: &str) -> bool {
        let lower = filename.to_ascii_lowercase();
        let Some((_, extension)) = lower.rsplit_once('.') else {
            return false;
        };

        match self {
            Self::Bin => extension == "bin" && lower.contains("pytorch_model"),
            other => extension == other.as_str(),
        }
    }
}

impl fmt::Display for WeightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, packaging-ready record for one model repository.
///
/// Only [`CompatibilityEvaluator`](crate::services::CompatibilityEvaluator)
/// constructs descriptors, and only after every compatibility check passed,
/// so a descriptor always carries a supported format and a size within the
/// ceiling of the run that produced it. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogDescriptor {
    id: String,
    family: String,
    arch: &'static str,
    format: WeightFormat,
    param_size: String,
    size_gb: Option<f64>,
    downloads: u64,
    likes: u64,
}

impl CatalogDescriptor {
    pub(crate) fn new(
        id: String,
        family: String,
        format: WeightFormat,
        param_size: String,
        size_gb: Option<f64>,
        downloads: u64,
        likes: u64,
    ) -> Self {
        Self {
            id,
            family,
            arch: AUTO_DETECTED_ARCH,
            format,
            param_size,
            size_gb,
            downloads,
            likes,
        }
    }

    /// Repository identifier (`owner/name`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Architecture family, or [`UNKNOWN`].
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Always [`AUTO_DETECTED_ARCH`].
    pub const fn arch(&self) -> &'static str {
        self.arch
    }

    pub const fn format(&self) -> WeightFormat {
        self.format
    }

    /// Parameter-count label such as `7B`, or [`UNKNOWN`].
    pub fn param_size(&self) -> &str {
        &self.param_size
    }

    /// Total weight size in GB rounded to two decimals, if known.
    pub const fn size_gb(&self) -> Option<f64> {
        self.size_gb
    }

    pub const fn downloads(&self) -> u64 {
        self.downloads
    }

    pub const fn likes(&self) -> u64 {
        self.likes
    }
}
