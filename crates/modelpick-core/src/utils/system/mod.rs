//! System utility types for prerequisite detection.
//!
//! This module provides pure domain types for external tool availability.
//! Active probing is implemented by `DefaultToolProbe` in `modelpick-cli`.

mod types;

pub use types::{PackagingToolLocation, Prerequisite, ToolStatus};
