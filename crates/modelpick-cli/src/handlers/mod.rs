//! Subcommand handlers.

pub mod select;
pub mod validate;
