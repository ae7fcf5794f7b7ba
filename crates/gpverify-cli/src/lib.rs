//! `gpverify` command-line adapter.
//!
//! Parses arguments, resolves configuration, runs the verifier from
//! `gpverify-core` and renders its report. `main.rs` only wires these
//! pieces together and maps errors to exit codes.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; tempfile is used by tests/
#[cfg(test)]
use tempfile as _;

// Used by main.rs only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{CheckArgs, Commands, OutputFormat};
pub use error::CliError;
pub use parser::Cli;
