//! Configuration file loading and parsing.

use crate::types::SailkitConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Location of the config file inside a project.
pub const CONFIG_FILE: &str = ".sailkit/config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env var pattern is valid")
    })
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// The project directory this loader resolves against.
    pub fn project_dir(&self) -> &Path {
        &self.base_path
    }

    /// Load configuration from `.sailkit/config.yaml`, falling back to defaults
    /// when the file does not exist.
    pub fn load(&self) -> Result<SailkitConfig, ConfigError> {
        let config_path = self.base_path.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(SailkitConfig::default());
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_file(&self, path: &Path) -> Result<SailkitConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        self.parse(&contents, |var| std::env::var(var).ok())
    }

    /// Parse YAML content with `${VAR}` expansion through `lookup`.
    pub fn parse<F>(&self, contents: &str, lookup: F) -> Result<SailkitConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = expand_env_vars(contents, lookup)?;

        // An empty file is a valid "all defaults" config
        if expanded.trim().is_empty() {
            return Ok(SailkitConfig::default());
        }

        let config: SailkitConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        validate(&config)?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
fn expand_env_vars<F>(content: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = content.to_string();

    for cap in env_var_pattern().captures_iter(content) {
        let full_match = &cap[0];
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match lookup(var_name) {
            Some(v) => v,
            None => match default {
                Some(d) => d.to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result = result.replace(full_match, &value);
    }

    Ok(result)
}

/// Validate configuration values.
fn validate(config: &SailkitConfig) -> Result<(), ConfigError> {
    if config.package.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "package.name must not be empty".to_string(),
        });
    }

    let paths = [
        ("package.root", config.package.root.as_os_str().is_empty()),
        ("steering.dir", config.steering.dir.as_os_str().is_empty()),
        ("steering.components_file", config.steering.components_file.is_empty()),
        ("steering.types_file", config.steering.types_file.is_empty()),
        ("registry.command", config.registry.command.trim().is_empty()),
    ];
    if let Some((field, _)) = paths.iter().find(|(_, empty)| *empty) {
        return Err(ConfigError::ValidationError {
            message: format!("{field} must not be empty"),
        });
    }

    if config.steering.components_file == config.steering.types_file {
        return Err(ConfigError::ValidationError {
            message: "steering.components_file and steering.types_file must differ".to_string(),
        });
    }

    for (field, pattern) in [
        ("steering.components_pattern", &config.steering.components_pattern),
        ("steering.types_pattern", &config.steering.types_pattern),
    ] {
        glob::Pattern::new(pattern).map_err(|e| ConfigError::ValidationError {
            message: format!("{field} is not a valid glob: {e}"),
        })?;
    }

    Ok(())
}
