//! Lint-colors command implementation.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use sailkit_common_fs::path::display_relative;
use sailkit_palette::ColorLinter;
use tracing::{info, warn};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_json, print_text, render_lint_report};

/// Report color utility classes that use off-palette steps.
///
/// Findings are warnings: the command always exits successfully.
#[derive(Debug, Parser)]
pub struct LintColorsCommand {
    /// Files or directories to check (defaults to the configured source root)
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}

impl LintColorsCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let linter = ColorLinter::new();
        let report = if self.paths.is_empty() {
            linter.check_tree(&ctx.paths.source_root)
        } else {
            linter.check_paths(&self.paths)
        };

        for skipped in &report.skipped {
            warn!(path = %display_relative(&skipped.path), reason = %skipped.reason, "not linted");
        }
        info!(
            files = report.files_scanned,
            findings = report.findings.len(),
            "color lint finished"
        );

        if ctx.is_json() {
            return print_json(&report);
        }
        print_text(&render_lint_report(&report, &ctx.icons))
    }
}
