//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - No process/filesystem implementation details
//! - Adapters map their own errors to port errors at the boundary

pub mod catalog;
pub mod tool_probe;

pub use catalog::{CatalogError, CatalogQuery, CatalogResult, ModelCatalogPort, SortKey};
pub use tool_probe::ToolProbePort;
