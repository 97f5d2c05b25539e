//! File system utilities for sailkit.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sailkit_common_core::{Error, ErrorCode, Result};
use walkdir::{DirEntry, WalkDir};

pub mod path;

/// Default upper bound for files read as text (declaration files, steering docs).
pub const DEFAULT_MAX_READ: usize = 8 * 1024 * 1024;

fn fs_error(code: ErrorCode, message: String, path: &Path, source: Option<io::Error>) -> Error {
    Error::FileSystem {
        code,
        message,
        path: Some(path.to_string_lossy().to_string()),
        source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
    }
}

/// Read a file to string with size limit.
pub fn read_to_string(path: impl AsRef<Path>, max_size: usize) -> Result<String> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => fs_error(
            ErrorCode::FILE_NOT_FOUND,
            format!("file not found: {}", path.display()),
            path,
            Some(e),
        ),
        io::ErrorKind::PermissionDenied => fs_error(
            ErrorCode::FILE_READ_ERROR,
            format!("permission denied: {}", path.display()),
            path,
            Some(e),
        ),
        _ => fs_error(
            ErrorCode::FILE_READ_ERROR,
            format!("failed to read metadata: {}", path.display()),
            path,
            Some(e),
        ),
    })?;

    if metadata.len() as usize > max_size {
        return Err(fs_error(
            ErrorCode::FILE_READ_ERROR,
            format!("file too large: {} bytes (max: {})", metadata.len(), max_size),
            path,
            None,
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        fs_error(
            ErrorCode::FILE_READ_ERROR,
            format!("failed to read file: {}", path.display()),
            path,
            Some(e),
        )
    })
}

/// Read a file to string, treating any failure as empty content.
///
/// Used where a missing or unreadable file simply means "no prior state".
pub fn read_to_string_or_empty(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match read_to_string(path, DEFAULT_MAX_READ) {
        Ok(content) => content,
        Err(e) => {
            if !e.is_not_found() {
                tracing::debug!(path = %path.display(), error = %e, "treating unreadable file as empty");
            }
            String::new()
        }
    }
}

/// Write to a file atomically (write to temp, then rename).
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| {
        fs_error(
            ErrorCode::FILE_WRITE_ERROR,
            format!("failed to create parent directory: {}", parent.display()),
            parent,
            Some(e),
        )
    })?;

    // Temp file lives next to the target so the rename stays on one filesystem
    let mut temp_path = path.to_path_buf();
    if let Some(name) = path.file_name() {
        temp_path.set_file_name(format!(".{}.tmp", name.to_string_lossy()));
    } else {
        temp_path.push(".tmp");
    }

    {
        let mut file = File::create(&temp_path).map_err(|e| {
            fs_error(
                ErrorCode::FILE_WRITE_ERROR,
                format!("failed to create temporary file: {}", temp_path.display()),
                &temp_path,
                Some(e),
            )
        })?;

        let written = file.write_all(contents).and_then(|_| file.sync_all());
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(fs_error(
                ErrorCode::FILE_WRITE_ERROR,
                format!("failed to write temporary file: {}", temp_path.display()),
                &temp_path,
                Some(e),
            ));
        }
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        fs_error(
            ErrorCode::FILE_WRITE_ERROR,
            format!("failed to rename temporary file to target: {}", path.display()),
            path,
            Some(e),
        )
    })?;

    Ok(())
}

/// Write string to file atomically.
pub fn write_string_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    write_atomic(path, contents.as_bytes())
}

/// List directories in a directory, sorted by name.
pub fn list_dirs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut dirs = Vec::new();

    let read_dir = fs::read_dir(dir).map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            ErrorCode::FILE_NOT_FOUND
        } else {
            ErrorCode::FILE_READ_ERROR
        };
        fs_error(code, format!("failed to read directory: {}", dir.display()), dir, Some(e))
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|e| {
            fs_error(
                ErrorCode::FILE_READ_ERROR,
                format!("failed to read directory entry: {}", dir.display()),
                dir,
                Some(e),
            )
        })?;

        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Filter for [`walk_files`].
#[derive(Debug, Clone, Copy)]
pub struct WalkFilter<'a> {
    /// File name suffixes to keep, e.g. `.tsx`.
    pub extensions: &'a [&'a str],
    /// Directory names that are never descended into.
    pub excluded_dirs: &'a [&'a str],
}

impl WalkFilter<'_> {
    fn keeps_file(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }

    fn enters(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !self.excluded_dirs.iter().any(|d| *d == name)
    }
}

/// Recursively collect files under `root` matching `filter`, sorted by path.
///
/// Unreadable entries are skipped. A missing root yields an error so the
/// caller can decide whether that matters.
pub fn walk_files(root: impl AsRef<Path>, filter: WalkFilter<'_>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(fs_error(
            ErrorCode::FILE_NOT_FOUND,
            format!("directory not found: {}", root.display()),
            root,
            None,
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| filter.enters(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && filter.keeps_file(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
