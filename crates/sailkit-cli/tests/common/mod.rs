//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::prelude::*;
use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// A throwaway project directory the binary runs in.
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get path to the project directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the project, creating parents.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Read a project file.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).expect("Failed to read file")
    }

    /// Write `.sailkit/config.yaml`.
    pub fn with_config(self, config: &str) -> Self {
        self.write(".sailkit/config.yaml", config);
        self
    }

    /// Lay out an installed design-system package with a few components and types.
    pub fn with_package(self) -> Self {
        let root = "node_modules/@pglevy/sailwind/dist";
        self.write(
            &format!("{root}/components/ButtonWidget/index.d.ts"),
            "export { ButtonWidget } from './ButtonWidget';\nexport type { ButtonWidgetProps } from './ButtonWidget';\n",
        );
        self.write(
            &format!("{root}/components/TextField/index.d.ts"),
            "export { TextField } from './TextField';\n",
        );
        self.write(
            &format!("{root}/types.d.ts"),
            "export type SAILSize = 'SMALL' | 'STANDARD' | 'LARGE';\n",
        );
        self
    }

    /// Point the registry query at a command that does not exist.
    pub fn with_offline_registry(self) -> Self {
        self.with_config("registry:\n  command: sailkit-test-no-such-npm\n")
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        Command::from_std(self.std_command())
    }

    /// The same command as a plain process, for tests that manage pipes themselves.
    pub fn std_command(&self) -> StdCommand {
        let mut cmd = StdCommand::cargo_bin("sailkit").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("SAILKIT_CONFIG")
            .env_remove("SAILKIT_LOG_LEVEL")
            .env_remove("RUST_LOG")
            .env("TERM", "xterm")
            .env("LANG", "C.UTF-8")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
