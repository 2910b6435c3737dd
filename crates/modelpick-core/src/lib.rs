//! Core domain for modelpick.
//!
//! Holds the packaging-compatibility selection pipeline (evaluator and
//! selector), the offline workflow validator, and the port traits that
//! adapters implement. Nothing in here performs network or process I/O
//! directly; adapters are injected through [`ports`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    AUTO_DETECTED_ARCH, CatalogDescriptor, CatalogListing, DEFAULT_FAMILIES, FamilyVocabulary,
    RawModelInfo, RepoFile, UNKNOWN, WeightFormat, extract_param_size,
};
pub use ports::{
    CatalogError, CatalogQuery, CatalogResult, ModelCatalogPort, SortKey, ToolProbePort,
};
pub use services::{
    CompatibilityEvaluator, Evaluation, PrerequisiteReport, RejectReason, Rejection,
    SchemaViolation, SelectionError, SelectionOutcome, TopModelSelector, ValidationReport,
    WorkflowValidator, detect_format,
};
pub use settings::{SelectionParams, SettingsError, ValidatorSettings};
pub use utils::system::{PackagingToolLocation, Prerequisite, ToolStatus};
