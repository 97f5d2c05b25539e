//! Report formatting.
//!
//! Renderers return plain strings so commands stay thin and the text layout
//! can be tested without a terminal.

pub mod icons;

pub use icons::{IconContext, Icons};

use std::fmt::Write as _;
use std::io::{self, ErrorKind, Write};

use anyhow::Context;
use sailkit_common_fs::path::display_relative;
use sailkit_palette::{LintReport, PaletteRuleSet};
use sailkit_steering::{SyncOutcome, SyncStatus, UpdateCheck};
use serde::Serialize;

use crate::error::CliError;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize report")?;
    json.push('\n');
    print_text(&json)
}

/// Print rendered text on stdout.
///
/// A reader that goes away early (`sailkit lint-colors | head`) is not an error.
pub fn print_text(text: &str) -> Result<(), CliError> {
    write_text(&mut io::stdout().lock(), text)
}

fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), CliError> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(CliError::io("failed to write to stdout", e)),
        _ => Ok(()),
    }
}

/// Text for a lint run: findings grouped per file, then a summary.
pub fn render_lint_report(report: &LintReport, icons: &IconContext) -> String {
    let rules = PaletteRuleSet;
    let mut out = String::new();

    if report.is_clean() {
        let _ = writeln!(
            out,
            "{} All color classes use approved palette steps ({})",
            icons.check(),
            rules.describe()
        );
        return out;
    }

    for (file, findings) in report.by_file() {
        let _ = writeln!(out, "\n{}:", display_relative(file));
        for finding in findings {
            let _ = writeln!(out, "  {finding}");
        }
    }

    let _ = writeln!(
        out,
        "\n{} Found {} color class(es) using non-standard steps.",
        icons.warning(),
        report.findings.len()
    );
    let _ = writeln!(out, "  Approved steps: {}", rules.describe());
    let _ = writeln!(out, "  These are warnings only; override intentionally if needed.");
    out
}

/// Text for an update check; empty unless an update is available.
pub fn render_update_notice(check: &UpdateCheck, icons: &IconContext) -> String {
    let Some(lines) = check.notice() else {
        return String::new();
    };

    let mut out = String::from("\n");
    let mut lines = lines.into_iter();
    if let Some(headline) = lines.next() {
        let _ = writeln!(out, "  {}  {headline}", icons.update());
    }
    for line in lines {
        let _ = writeln!(out, "     {line}");
    }
    out.push('\n');
    out
}

/// Text for one synced document; empty unless it was written.
pub fn render_sync_outcome(kind: &str, outcome: &SyncOutcome, icons: &IconContext) -> String {
    match outcome.status {
        SyncStatus::Written => format!(
            "  {} Updated {} with {} {kind} from package.\n",
            icons.check(),
            display_relative(&outcome.path),
            outcome.entries
        ),
        SyncStatus::Unchanged | SyncStatus::Skipped => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sailkit_palette::ColorLinter;
    use sailkit_steering::UpdateStatus;
    use std::path::{Path, PathBuf};

    fn icons() -> IconContext {
        IconContext::with_unicode(true)
    }

    struct FailingWriter(ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_text_ignores_closed_reader() {
        assert!(write_text(&mut FailingWriter(ErrorKind::BrokenPipe), "report\n").is_ok());

        let err = write_text(&mut FailingWriter(ErrorKind::PermissionDenied), "report\n").unwrap_err();
        assert_eq!(err.exit_code(), std::process::ExitCode::from(3));

        let mut buf = Vec::new();
        write_text(&mut buf, "report\n").unwrap();
        assert_eq!(buf, b"report\n");
    }

    #[test]
    fn test_clean_lint_report() {
        let text = render_lint_report(&LintReport::default(), &icons());
        assert_eq!(
            text,
            "✓ All color classes use approved palette steps (50, 100, 200, 500, 700, 900)\n"
        );
    }

    #[test]
    fn test_lint_report_groups_by_file() {
        let linter = ColorLinter::new();
        let report = LintReport {
            files_scanned: 2,
            findings: [
                linter.check_content(Path::new("src/a.tsx"), "bg-blue-300 text-red-400"),
                linter.check_content(Path::new("src/b.css"), "border-gray-800"),
            ]
            .concat(),
            skipped: Vec::new(),
        };

        let text = render_lint_report(&report, &icons());
        assert!(text.starts_with("\nsrc/a.tsx:\n  Line 1, col 1: \"bg-blue-300\" uses step 300 (try 200 instead)\n"));
        assert!(text.contains("\nsrc/b.css:\n  Line 1, col 1: \"border-gray-800\""));
        assert!(text.contains("⚠ Found 3 color class(es) using non-standard steps."));
        assert!(text.contains("  Approved steps: 50, 100, 200, 500, 700, 900\n"));
        assert!(text.ends_with("override intentionally if needed.\n"));
    }

    #[test]
    fn test_update_notice() {
        let check = UpdateCheck {
            package: "@pglevy/sailwind".to_string(),
            status: UpdateStatus::UpdateAvailable {
                current: "0.4.1".to_string(),
                latest: "0.5.0".to_string(),
            },
        };
        assert_eq!(
            render_update_notice(&check, &icons()),
            "\n  ⬆  Sailwind update available: 0.4.1 → 0.5.0\n     Run: npm install @pglevy/sailwind@latest\n\n"
        );

        let quiet = UpdateCheck {
            status: UpdateStatus::UpToDate,
            ..check
        };
        assert!(render_update_notice(&quiet, &icons()).is_empty());
    }

    #[test]
    fn test_sync_outcome_only_reports_writes() {
        let written = SyncOutcome {
            path: PathBuf::from(".kiro/steering/sail-types.md"),
            status: SyncStatus::Written,
            entries: 12,
        };
        assert_eq!(
            render_sync_outcome("types", &written, &icons()),
            "  ✓ Updated .kiro/steering/sail-types.md with 12 types from package.\n"
        );
        assert!(render_sync_outcome("types", &SyncOutcome::skipped("x.md"), &icons()).is_empty());
    }
}
