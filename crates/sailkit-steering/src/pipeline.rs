//! Full sync run: introspect, categorize, render, and sync both documents.

use std::path::Path;

use sailkit_common_config::{ResolvedPaths, SailkitConfig};
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::categorize::categorize;
use crate::error::SyncError;
use crate::introspect::PackageIntrospector;
use crate::render::{components_document, types_document};
use crate::sync::{sync_document, PlannedDocument, SyncOutcome};

/// Outcomes for both steering documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub components: SyncOutcome,
    pub types: SyncOutcome,
}

impl SyncReport {
    pub fn outcomes(&self) -> [&SyncOutcome; 2] {
        [&self.components, &self.types]
    }

    pub fn any_written(&self) -> bool {
        self.outcomes().iter().any(|o| o.was_written())
    }
}

/// Sync both documents for the project at `project_dir`.
///
/// Both documents are always attempted; if either write fails, the first
/// failure is returned after the other document has been handled.
pub fn sync_all(config: &SailkitConfig, project_dir: &Path) -> Result<SyncReport, SyncError> {
    let paths = config.resolve(project_dir);
    let _span = info_span!("sync", package = %config.package.name).entered();

    let introspector = PackageIntrospector::from_paths(&paths);
    let components = sync_components(config, &paths, &introspector);
    let types = sync_types(config, &paths, &introspector);

    match (components, types) {
        (Ok(components), Ok(types)) => Ok(SyncReport { components, types }),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(first), Err(second)) => {
            warn!(path = %second.path().display(), error = %second, "second steering write also failed");
            Err(first)
        }
    }
}

/// Sync the component list document.
///
/// An empty component set almost always means the package is not installed,
/// so the existing document is kept rather than replaced with an empty list.
pub fn sync_components(
    config: &SailkitConfig,
    paths: &ResolvedPaths,
    introspector: &PackageIntrospector,
) -> Result<SyncOutcome, SyncError> {
    let names: Vec<String> = introspector.components().into_iter().map(|s| s.name).collect();
    if names.is_empty() {
        info!(dir = %paths.components_dir.display(), "no components found, leaving document untouched");
        return Ok(SyncOutcome::skipped(&paths.components_doc));
    }

    let document = components_document(
        &paths.components_doc,
        &config.steering.components_pattern,
        &config.package.name,
        &categorize(&names[..]),
    );
    sync_document(&PlannedDocument::exact(document, names))
}

/// Sync the type reference document. Skipped when no aliases are exported.
pub fn sync_types(
    config: &SailkitConfig,
    paths: &ResolvedPaths,
    introspector: &PackageIntrospector,
) -> Result<SyncOutcome, SyncError> {
    let aliases = introspector.type_aliases();
    if aliases.is_empty() {
        info!(file = %paths.types_file.display(), "no type aliases found, leaving document untouched");
        return Ok(SyncOutcome::skipped(&paths.types_doc));
    }

    let document = types_document(
        &paths.types_doc,
        &config.steering.types_pattern,
        &config.package.name,
        &aliases,
    );
    let entries = aliases.into_iter().map(|a| a.signature).collect();
    sync_document(&PlannedDocument::all_entries(document, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::SyncStatus;
    use std::fs as stdfs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_package_skips_both() {
        let dir = tempdir().unwrap();
        let report = sync_all(&SailkitConfig::default(), dir.path()).unwrap();
        assert_eq!(report.components.status, SyncStatus::Skipped);
        assert_eq!(report.types.status, SyncStatus::Skipped);
        assert!(!report.any_written());
        assert!(!dir.path().join(".kiro").exists());
    }

    #[test]
    fn test_existing_document_survives_missing_package() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join(".kiro/steering/sail-components.md");
        stdfs::create_dir_all(doc.parent().unwrap()).unwrap();
        stdfs::write(&doc, "curated list\n").unwrap();

        sync_all(&SailkitConfig::default(), dir.path()).unwrap();
        assert_eq!(stdfs::read_to_string(&doc).unwrap(), "curated list\n");
    }
}
