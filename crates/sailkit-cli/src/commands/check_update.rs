//! Check-update command implementation.

use clap::Parser;
use sailkit_steering::{check_for_update, NpmRegistry, UpdateCheck};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_json, print_text, render_update_notice};

/// Check whether a newer version of the design-system package is published.
///
/// Advisory only: this command never fails.
#[derive(Debug, Parser)]
pub struct CheckUpdateCommand {}

impl CheckUpdateCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let check = run_update_check(ctx);
        print_update_check(ctx, &check)
    }
}

/// Query the registry configured for this project.
pub(crate) fn run_update_check(ctx: &CommandContext) -> UpdateCheck {
    let registry = NpmRegistry::new(&ctx.config.registry.command);
    check_for_update(&registry, &ctx.config.package.name)
}

pub(crate) fn print_update_check(ctx: &CommandContext, check: &UpdateCheck) -> Result<(), CliError> {
    if ctx.is_json() {
        return print_json(check);
    }
    print_text(&render_update_notice(check, &ctx.icons))
}
