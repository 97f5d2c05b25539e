//! Predev command implementation.

use clap::Parser;
use sailkit_steering::sync_all;
use serde::Serialize;
use tracing::error;

use super::check_update::{print_update_check, run_update_check};
use super::sync::print_sync_report;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::print_json;

/// Run the update check, then sync steering documents.
///
/// Meant to run before the dev server starts, so by default nothing here
/// stops it from starting.
#[derive(Debug, Parser)]
pub struct PredevCommand {
    /// Exit non-zero when a steering document cannot be written
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct PredevReport<'a> {
    update: &'a sailkit_steering::UpdateCheck,
    sync: Option<&'a sailkit_steering::SyncReport>,
    sync_error: Option<String>,
}

impl PredevCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let update = run_update_check(ctx);
        let synced = sync_all(&ctx.config, &ctx.project_dir);

        if ctx.is_json() {
            print_json(&PredevReport {
                update: &update,
                sync: synced.as_ref().ok(),
                sync_error: synced.as_ref().err().map(ToString::to_string),
            })?;
        } else {
            print_update_check(ctx, &update)?;
            if let Ok(report) = &synced {
                print_sync_report(ctx, report)?;
            }
        }

        match synced {
            Ok(_) => Ok(()),
            Err(e) if self.strict => Err(e.into()),
            Err(e) => {
                error!(path = %e.path().display(), error = %e, "steering sync failed, continuing");
                Ok(())
            }
        }
    }
}
