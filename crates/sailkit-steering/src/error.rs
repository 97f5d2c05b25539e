//! Steering sync errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that escape a sync run. Only persisting a document can fail;
/// absent or malformed inputs are absorbed earlier.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Writing a steering document failed.
    #[error("failed to write steering document {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: sailkit_common_core::Error,
    },
}

impl SyncError {
    /// Path of the document that could not be written.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Write { path, .. } => path,
        }
    }
}
