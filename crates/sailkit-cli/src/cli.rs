//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use sailkit_common_config::{ConfigLoader, ResolvedPaths, SailkitConfig};
use tracing::warn;

use crate::commands::{CheckUpdateCommand, LintColorsCommand, PredevCommand, SyncCommand};
use crate::error::CliError;
use crate::output::IconContext;

/// Sailkit - keep a Sailwind project's assistant guidance and styling honest
///
/// Regenerates steering documents from the installed design-system package,
/// checks for package updates, and lints color utility classes.
#[derive(Debug, Parser)]
#[command(
    name = "sailkit",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "SAILKIT_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate steering documents from the installed package
    Sync(SyncCommand),

    /// Check whether a newer package version is published
    CheckUpdate(CheckUpdateCommand),

    /// Run the update check, then sync (dev server hook)
    Predev(PredevCommand),

    /// Report color classes that use off-palette steps
    LintColors(LintColorsCommand),
}

impl Command {
    /// Whether a configuration error should abort the command.
    pub fn requires_valid_config(&self) -> bool {
        matches!(self, Self::Sync(_))
    }
}

impl Cli {
    /// Build the command context: project directory, configuration, and output settings.
    ///
    /// The project directory is always the working directory. `--config`
    /// only chooses which file is read. Only `sync` fails on a bad config;
    /// the dev hooks warn and run with defaults so they never block startup.
    pub fn context(&self) -> Result<CommandContext, CliError> {
        let project_dir = std::env::current_dir()
            .map_err(|e| CliError::io("cannot determine working directory", e))?;
        let loader = ConfigLoader::new(&project_dir);

        let loaded = match &self.config {
            Some(path) => loader.load_file(path),
            None => loader.load(),
        };
        let config = match loaded {
            Ok(config) => config,
            Err(e) if !self.command.requires_valid_config() => {
                warn!(error = %e, "ignoring configuration, using defaults");
                SailkitConfig::default()
            }
            Err(e) => return Err(CliError::from_config(e)),
        };

        Ok(CommandContext::new(config, project_dir, self.format))
    }

    /// Execute the selected command
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        match &self.command {
            Command::Sync(cmd) => cmd.execute(ctx),
            Command::CheckUpdate(cmd) => cmd.execute(ctx),
            Command::Predev(cmd) => cmd.execute(ctx),
            Command::LintColors(cmd) => cmd.execute(ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub config: SailkitConfig,
    pub project_dir: PathBuf,
    pub paths: ResolvedPaths,
    pub format: OutputFormat,
    pub icons: IconContext,
}

impl CommandContext {
    pub fn new(config: SailkitConfig, project_dir: PathBuf, format: OutputFormat) -> Self {
        let paths = config.resolve(&project_dir);
        Self {
            config,
            project_dir,
            paths,
            format,
            icons: IconContext::new(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
