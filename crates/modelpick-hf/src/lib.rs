//! `HuggingFace` Hub adapter for the modelpick catalog port.
//!
//! Implements [`modelpick_core::ModelCatalogPort`] over the Hub's public
//! models API: one ranked listing request per selection run plus one
//! metadata lookup (with file sizes) per candidate. Transient failures are
//! retried with exponential backoff; every error is mapped to
//! [`modelpick_core::CatalogError`] at the boundary.
//!
//! ```no_run
//! use modelpick_hf::{DefaultHfClient, HfClientConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DefaultHfClient::new(&HfClientConfig::new().with_optional_token(None))?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultHfClient is meant to be used through ModelCatalogPort, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultHfClient;

// Configuration
pub use config::{DEFAULT_ENDPOINT, HfClientConfig};

// Errors surfaced by client construction
pub use error::HfError;
