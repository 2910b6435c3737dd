//! Command-line adapter for modelpick.
//!
//! Wires the HuggingFace catalog adapter and the local tool probe into the
//! core selection pipeline and workflow validator. `main.rs` is the
//! composition root; everything reachable from it lives here so it can be
//! tested.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod system;

// Re-export primary types for convenient access
pub use commands::{Commands, SelectArgs, SortArg, ValidateArgs};
pub use parser::Cli;
pub use system::DefaultToolProbe;
