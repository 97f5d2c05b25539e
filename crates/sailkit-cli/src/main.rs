//! Sailkit CLI
//!
//! Main entry point for the `sailkit` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use sailkit_cli::cli::Cli;
use sailkit_cli::error::CliError;
use sailkit_common_log::{LogConfig, LogLevel};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), "{e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = cli.context()?;
    cli.execute(&ctx)
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    // Flags beat the environment; with neither, the env level stands
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = sailkit_common_log::init(config) {
        eprintln!("warning: logging disabled: {e}");
    }
}
