//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SailkitConfig {
    /// The design-system package being tracked.
    pub package: PackageConfig,
    /// Where generated steering documents live.
    pub steering: SteeringConfig,
    /// Color linter settings.
    pub lint: LintConfig,
    /// Registry query settings.
    pub registry: RegistryConfig,
}

/// Installed package layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Published package name.
    pub name: String,
    /// Installed location, relative to the project.
    pub root: PathBuf,
    /// Directory of component sub-modules, relative to `root`.
    pub components_dir: PathBuf,
    /// Aggregate type declaration file, relative to `root`.
    pub types_file: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "@pglevy/sailwind".to_string(),
            root: PathBuf::from("node_modules/@pglevy/sailwind"),
            components_dir: PathBuf::from("dist/components"),
            types_file: PathBuf::from("dist/types.d.ts"),
        }
    }
}

/// Steering document locations and scoping patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Directory holding the steering documents.
    pub dir: PathBuf,
    /// File name of the component list.
    pub components_file: String,
    /// File name of the type reference.
    pub types_file: String,
    /// `fileMatchPattern` written into the component document.
    pub components_pattern: String,
    /// `fileMatchPattern` written into the type document.
    pub types_pattern: String,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".kiro/steering"),
            components_file: "sail-components.md".to_string(),
            types_file: "sail-types.md".to_string(),
            components_pattern: "src/pages/**".to_string(),
            types_pattern: "src/**/*.tsx".to_string(),
        }
    }
}

/// Color linter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Directory scanned when no paths are given.
    pub source_root: PathBuf,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src"),
        }
    }
}

/// Registry query settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Package manager executable used for `outdated` queries.
    pub command: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            command: "npm".to_string(),
        }
    }
}

/// A configuration with every relative path anchored at a project directory.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub package_root: PathBuf,
    pub components_dir: PathBuf,
    pub types_file: PathBuf,
    pub components_doc: PathBuf,
    pub types_doc: PathBuf,
    pub source_root: PathBuf,
}

impl SailkitConfig {
    /// Resolve configured paths against `project_dir`.
    pub fn resolve(&self, project_dir: &Path) -> ResolvedPaths {
        let package_root = project_dir.join(&self.package.root);
        let steering_dir = project_dir.join(&self.steering.dir);
        ResolvedPaths {
            components_dir: package_root.join(&self.package.components_dir),
            types_file: package_root.join(&self.package.types_file),
            components_doc: steering_dir.join(&self.steering.components_file),
            types_doc: steering_dir.join(&self.steering.types_file),
            source_root: project_dir.join(&self.lint.source_root),
            package_root,
        }
    }
}
