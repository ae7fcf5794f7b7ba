//! CLI entry point - the composition root.
//!
//! Parses arguments, sets up logging, resolves configuration and
//! dispatches to a handler. Errors are mapped to exit codes here and
//! nowhere else.

use std::process::ExitCode;

use clap::Parser;

use gpverify_cli::error::exit_code_for;
use gpverify_cli::handlers::check::{self, CheckOutput};
use gpverify_cli::{Cli, CliConfig, Commands, OutputFormat, bootstrap, handlers, logging};

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => {
            let output = CheckOutput::for_stdout(args.format, args.no_color);
            let config = match CliConfig::from_env(args.gpdb_version.as_deref(), args.root) {
                Ok(config) => config,
                Err(err) => {
                    if args.format == OutputFormat::Json {
                        check::write_error_json(&mut std::io::stdout().lock(), &err)?;
                    }
                    return Err(err.into());
                }
            };
            let ctx = bootstrap(config);
            check::execute(&ctx, output)
        }
        Commands::Paths { gpdb_version } => {
            let config = CliConfig::from_env(gpdb_version.as_deref(), None)?;
            handlers::paths::execute(&config.version)
        }
    }
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init_tracing(cli.verbose);

    // Load environment variables; real environment takes precedence
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    match run(cli.into_command()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
