//! Commands enum and per-command arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check that every gpbackup binary is installed (default)
    Check(CheckArgs),

    /// Show the paths that would be checked, without touching the filesystem
    Paths {
        /// Greenplum version to build paths for (overrides GPDB_VERSION)
        #[arg(long = "gpdb-version", value_name = "VERSION")]
        gpdb_version: Option<String>,
    },
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckArgs {
    /// Greenplum version to verify (overrides GPDB_VERSION)
    #[arg(long = "gpdb-version", value_name = "VERSION")]
    pub gpdb_version: Option<String>,

    /// Check paths under this directory instead of / (e.g. a mounted image)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable coloured output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// How the report is written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Serialized report
    Json,
}
