//! Compare-then-write for steering documents.

use std::path::PathBuf;

use sailkit_common_fs as fs;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::SyncError;
use crate::render::SteeringDocument;

/// How an existing document is judged up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// The file must equal the rendered document byte for byte.
    ExactBody,
    /// The file must exist and contain every entry verbatim. Hand-added
    /// prose survives as long as no entry is missing.
    AllEntriesPresent,
}

/// A rendered document together with the rule used to decide whether to write it.
#[derive(Debug, Clone)]
pub struct PlannedDocument {
    pub document: SteeringDocument,
    /// Strings that must appear in the file under [`ComparisonMode::AllEntriesPresent`].
    pub entries: Vec<String>,
    pub mode: ComparisonMode,
}

impl PlannedDocument {
    pub fn exact(document: SteeringDocument, entries: Vec<String>) -> Self {
        Self {
            document,
            entries,
            mode: ComparisonMode::ExactBody,
        }
    }

    pub fn all_entries(document: SteeringDocument, entries: Vec<String>) -> Self {
        Self {
            document,
            entries,
            mode: ComparisonMode::AllEntriesPresent,
        }
    }

    /// Whether `existing` already satisfies this document.
    pub fn is_current(&self, existing: &str, rendered: &str) -> bool {
        match self.mode {
            ComparisonMode::ExactBody => existing == rendered,
            ComparisonMode::AllEntriesPresent => {
                !existing.is_empty() && self.entries.iter().all(|e| existing.contains(e.as_str()))
            }
        }
    }
}

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Written,
    Unchanged,
    /// Nothing was introspected, so the existing file was left alone.
    Skipped,
}

/// Result of syncing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub path: PathBuf,
    pub status: SyncStatus,
    /// Number of components or type aliases the document lists.
    pub entries: usize,
}

impl SyncOutcome {
    pub fn skipped(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: SyncStatus::Skipped,
            entries: 0,
        }
    }

    pub fn was_written(&self) -> bool {
        self.status == SyncStatus::Written
    }
}

/// Write `planned` if the file on disk is out of date.
///
/// A missing or unreadable file counts as empty. Only the write itself can fail.
pub fn sync_document(planned: &PlannedDocument) -> Result<SyncOutcome, SyncError> {
    let path = &planned.document.path;
    let rendered = planned.document.contents();
    let existing = fs::read_to_string_or_empty(path);

    if planned.is_current(&existing, &rendered) {
        debug!(path = %path.display(), "steering document up to date");
        return Ok(SyncOutcome {
            path: path.clone(),
            status: SyncStatus::Unchanged,
            entries: planned.entries.len(),
        });
    }

    fs::write_string_atomic(path, &rendered).map_err(|source| SyncError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), entries = planned.entries.len(), "wrote steering document");
    Ok(SyncOutcome {
        path: path.clone(),
        status: SyncStatus::Written,
        entries: planned.entries.len(),
    })
}
