//! Advisory check for a newer published version of the design-system package.
//!
//! The gate never fails: anything that goes wrong while asking the registry
//! degrades to [`UpdateStatus::Unknown`].

use std::io;
use std::process::Command;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::render::display_name;

/// Raw result of an `outdated` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    /// Whether the command exited zero. npm exits 1 when something is outdated.
    pub success: bool,
    pub stdout: String,
}

/// Something that can report whether a package is outdated.
pub trait RegistryQuery {
    /// Run the query. An `Err` means the query could not be made at all.
    fn outdated(&self, package: &str) -> io::Result<QueryOutput>;
}

/// Queries through the package manager CLI: `<command> outdated <package> --json`.
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    command: String,
}

impl NpmRegistry {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new("npm")
    }
}

impl RegistryQuery for NpmRegistry {
    fn outdated(&self, package: &str) -> io::Result<QueryOutput> {
        let output = Command::new(&self.command)
            .args(["outdated", package, "--json"])
            .output()?;

        Ok(QueryOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Outcome of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    UpToDate,
    UpdateAvailable { current: String, latest: String },
    Unknown,
}

/// Gate result for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCheck {
    pub package: String,
    #[serde(flatten)]
    pub status: UpdateStatus,
}

impl UpdateCheck {
    /// Lines to show the developer, if an update is available.
    pub fn notice(&self) -> Option<Vec<String>> {
        match &self.status {
            UpdateStatus::UpdateAvailable { current, latest } => Some(vec![
                format!(
                    "{} update available: {current} → {latest}",
                    display_name(&self.package)
                ),
                format!("Run: npm install {}@latest", self.package),
            ]),
            _ => None,
        }
    }
}

/// Ask `registry` whether `package` is outdated.
pub fn check_for_update(registry: &dyn RegistryQuery, package: &str) -> UpdateCheck {
    let status = match registry.outdated(package) {
        Ok(output) => {
            if !output.success {
                debug!(package, "outdated query exited non-zero, parsing stdout anyway");
            }
            parse_outdated(&output.stdout, package)
        }
        Err(e) => {
            debug!(package, error = %e, "could not run outdated query");
            UpdateStatus::Unknown
        }
    };

    UpdateCheck {
        package: package.to_string(),
        status,
    }
}

/// Interpret `outdated --json` output for one package.
///
/// Empty output or an object without the package means nothing is outdated.
pub fn parse_outdated(stdout: &str, package: &str) -> UpdateStatus {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return UpdateStatus::UpToDate;
    }

    let data: Value = match serde_json::from_str(trimmed) {
        Ok(data) => data,
        Err(e) => {
            debug!(error = %e, "outdated output is not JSON");
            return UpdateStatus::Unknown;
        }
    };

    let Some(object) = data.as_object() else {
        debug!("outdated output is not a JSON object");
        return UpdateStatus::Unknown;
    };

    let entry = match object.get(package) {
        None => return UpdateStatus::UpToDate,
        // Workspaces report one entry per dependent
        Some(Value::Array(items)) => match items.first() {
            Some(first) => first,
            None => return UpdateStatus::UpToDate,
        },
        Some(entry) => entry,
    };

    let field = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
    match (field("current"), field("latest")) {
        (Some(current), Some(latest)) if current == latest => UpdateStatus::UpToDate,
        (Some(current), Some(latest)) => UpdateStatus::UpdateAvailable { current, latest },
        _ => {
            debug!(package, "outdated entry lacks current or latest version");
            UpdateStatus::Unknown
        }
    }
}
