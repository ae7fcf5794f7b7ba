//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.
//! Running without a subcommand behaves like `check`, so the `check`
//! options are also accepted at the top level. Top-level `check` options
//! cannot be combined with a subcommand; clap rejects the mix as a usage
//! error.

use clap::Parser;

use crate::commands::{CheckArgs, Commands};

/// Command-line interface for the gpbackup installation verifier.
#[derive(Parser, Debug)]
#[command(name = "gpverify")]
#[command(about = "Verify that the gpbackup binaries are installed in a Greenplum bin directory")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, defaulting to `check` with the top-level options.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Check(self.check))
    }
}
