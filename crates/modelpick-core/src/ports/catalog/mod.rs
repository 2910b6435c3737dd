//! Model catalog port definitions.
//!
//! This module defines the port trait and DTOs for querying a remote model
//! hub. The `HuggingFace` implementation lives in `modelpick-hf`.

mod client;
mod error;
mod types;

#[cfg(test)]
pub use client::MockModelCatalogPort;
pub use client::ModelCatalogPort;
pub use error::{CatalogError, CatalogResult};
pub use types::{CatalogQuery, SortKey};
