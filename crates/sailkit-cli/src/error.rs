//! CLI error handling.

use std::io;
use std::process::ExitCode;

use sailkit_common_config::ConfigError;
use sailkit_steering::SyncError;
use thiserror::Error;

/// CLI error type with context for the user
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: ConfigError,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Sync(_) => "E003",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Sync(_) => 4,
            Self::Other(_) => 1,
        };
        ExitCode::from(code)
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::Sync(_) => Some("check that the steering directory is writable"),
            _ => None,
        }
    }

    /// Wrap a configuration loading failure
    pub fn from_config(source: ConfigError) -> Self {
        let hint = match &source {
            ConfigError::NotFound { .. } => {
                Some("omit --config (and unset SAILKIT_CONFIG) to use .sailkit/config.yaml or defaults")
            }
            ConfigError::EnvVarNotFound { .. } => {
                Some("set the variable or give it a default with ${VAR:-default}")
            }
            ConfigError::ParseError { .. } | ConfigError::ValidationError { .. } => {
                Some("fix the configuration file or delete it to use defaults")
            }
            _ => None,
        };
        Self::Config {
            message: format!("configuration error: {source}"),
            source,
            hint: hint.map(str::to_string),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}
