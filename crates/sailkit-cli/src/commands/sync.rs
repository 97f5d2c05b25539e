//! Sync command implementation.

use clap::Parser;
use sailkit_steering::{sync_all, SyncReport};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_json, print_text, render_sync_outcome};

/// Regenerate the component and type steering documents
#[derive(Debug, Parser)]
pub struct SyncCommand {}

impl SyncCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let report = sync_all(&ctx.config, &ctx.project_dir)?;
        print_sync_report(ctx, &report)
    }
}

/// Print a sync report in the selected format.
pub(crate) fn print_sync_report(ctx: &CommandContext, report: &SyncReport) -> Result<(), CliError> {
    if ctx.is_json() {
        return print_json(report);
    }

    let text: String = [("components", &report.components), ("types", &report.types)]
        .into_iter()
        .map(|(kind, outcome)| render_sync_outcome(kind, outcome, &ctx.icons))
        .collect();
    print_text(&text)
}
