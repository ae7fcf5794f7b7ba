//! Command handlers.
//!
//! Handlers follow the same pattern:
//! - Take the composed [`crate::CliContext`] (or resolved config)
//! - Call into `gpverify-core`
//! - Format output for the terminal
//!
//! Handlers do not read the environment or decide exit codes; failures
//! are returned as [`crate::CliError`] values.

pub mod check;
pub mod paths;
