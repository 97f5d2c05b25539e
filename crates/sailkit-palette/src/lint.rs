//! Color utility class linter.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use sailkit_common_fs::{self as fs, WalkFilter};
use serde::Serialize;
use tracing::debug;

use crate::palette::PaletteRuleSet;

/// Utility prefixes that take a color.
pub const PREFIXES: &[&str] = &[
    "bg", "text", "border", "ring", "shadow", "outline", "divide", "from", "to", "via", "accent",
    "caret", "fill", "stroke", "decoration",
];

/// Palette family names.
pub const FAMILIES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// File suffixes scanned when walking a directory.
pub const EXTENSIONS: &[&str] = &[".tsx", ".jsx", ".ts", ".css"];

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", ".git"];

fn color_class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"\b({})-({})-([0-9]+)\b",
            PREFIXES.join("|"),
            FAMILIES.join("|")
        );
        Regex::new(&pattern).expect("color class pattern is valid")
    })
}

/// One off-palette color class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorClassMatch {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    pub raw_class: String,
    pub numeric_step: u32,
    pub suggested_step: u32,
}

impl fmt::Display for ColorClassMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, col {}: \"{}\" uses step {} (try {} instead)",
            self.line, self.column, self.raw_class, self.numeric_step, self.suggested_step
        )
    }
}

/// A path that could not be linted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a lint run. Always produced, never an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub files_scanned: usize,
    pub findings: Vec<ColorClassMatch>,
    pub skipped: Vec<SkippedPath>,
}

impl LintReport {
    /// No off-palette classes were found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings grouped by file, in scan order.
    pub fn by_file(&self) -> Vec<(&Path, Vec<&ColorClassMatch>)> {
        let mut groups: Vec<(&Path, Vec<&ColorClassMatch>)> = Vec::new();
        for finding in &self.findings {
            match groups.last_mut() {
                Some((file, items)) if *file == finding.file.as_path() => items.push(finding),
                _ => groups.push((finding.file.as_path(), vec![finding])),
            }
        }
        groups
    }

    fn merge(&mut self, other: LintReport) {
        self.files_scanned += other.files_scanned;
        self.findings.extend(other.findings);
        self.skipped.extend(other.skipped);
    }
}

/// Scans text for color classes outside the approved palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorLinter {
    rules: PaletteRuleSet,
}

impl ColorLinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check file content already in memory.
    pub fn check_content(&self, file: &Path, content: &str) -> Vec<ColorClassMatch> {
        let mut findings = Vec::new();

        for (index, line) in content.lines().enumerate() {
            for caps in color_class_pattern().captures_iter(line) {
                let whole = &caps[0];
                let raw_step = &caps[3];
                // Digits too long for u32 are far past the top band anyway
                let step = raw_step.parse::<u32>().unwrap_or(u32::MAX);

                // "050" is not the canonical spelling of an approved step
                if self.rules.is_approved(step) && raw_step == step.to_string() {
                    continue;
                }

                let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                findings.push(ColorClassMatch {
                    file: file.to_path_buf(),
                    line: index + 1,
                    column: line[..start].chars().count() + 1,
                    raw_class: whole.to_string(),
                    numeric_step: step,
                    suggested_step: self.rules.suggest(step),
                });
            }
        }

        findings
    }

    /// Check a single file. Unreadable files are reported as skipped.
    pub fn check_file(&self, path: &Path) -> LintReport {
        match fs::read_to_string(path, fs::DEFAULT_MAX_READ) {
            Ok(content) => LintReport {
                files_scanned: 1,
                findings: self.check_content(path, &content),
                skipped: Vec::new(),
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                LintReport {
                    skipped: vec![SkippedPath {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    }],
                    ..LintReport::default()
                }
            }
        }
    }

    /// Recursively check every source file under `root`.
    pub fn check_tree(&self, root: &Path) -> LintReport {
        let filter = WalkFilter {
            extensions: EXTENSIONS,
            excluded_dirs: EXCLUDED_DIRS,
        };

        let files = match fs::walk_files(root, filter) {
            Ok(files) => files,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "cannot walk source root");
                return LintReport {
                    skipped: vec![SkippedPath {
                        path: root.to_path_buf(),
                        reason: e.to_string(),
                    }],
                    ..LintReport::default()
                };
            }
        };

        debug!(root = %root.display(), count = files.len(), "scanning source files");
        let mut report = LintReport::default();
        for file in files {
            report.merge(self.check_file(&file));
        }
        report
    }

    /// Check explicit paths: files are checked as given, directories are walked.
    pub fn check_paths(&self, paths: &[PathBuf]) -> LintReport {
        let mut report = LintReport::default();
        for path in paths {
            if path.is_dir() {
                report.merge(self.check_tree(path));
            } else {
                report.merge(self.check_file(path));
            }
        }
        report
    }
}
