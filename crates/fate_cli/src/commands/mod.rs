//! CLI command implementations
//!
//! Each submodule implements one `fate` subcommand. Commands write their
//! results to the given writer and log progress through `tracing`.

pub mod check;
pub mod histogram;
pub mod roll;
