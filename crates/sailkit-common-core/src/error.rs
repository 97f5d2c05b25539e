//! Error types for sailkit.

use thiserror::Error;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    pub const FILE_NOT_FOUND: ErrorCode = ErrorCode("FS001");
    pub const FILE_READ_ERROR: ErrorCode = ErrorCode("FS002");
    pub const FILE_WRITE_ERROR: ErrorCode = ErrorCode("FS003");

    /// The code as a string, e.g. `FS001`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// The main error type for sailkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File system error with the offending path.
    #[error("{message}")]
    FileSystem {
        code: ErrorCode,
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FileSystem { code, .. } => *code,
        }
    }

    /// Path involved in the error, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::FileSystem { path, .. } => path.as_deref(),
        }
    }

    /// True when the error means "the file is not there".
    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::FILE_NOT_FOUND
    }
}

/// Result type alias using sailkit's Error.
pub type Result<T> = std::result::Result<T, Error>;
