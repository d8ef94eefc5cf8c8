//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up unit layouts and manifests.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a unit directory with a package.json descriptor
    pub fn create_unit(&self, name: &str) {
        self.create_file(&format!("{name}/package.json"), "{}");
    }

    /// Create a unit directory without a descriptor
    #[allow(dead_code)]
    pub fn create_bare_unit(&self, name: &str) {
        std::fs::create_dir_all(self.dir.path().join(name)).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Write an orbit.toml using a shell build command that drops a
    /// `built.stamp` in the unit directory and fails when a `fail.marker`
    /// is present. That makes per-unit success/failure and "was this unit
    /// ever attempted" fully scriptable from the test.
    pub fn write_manifest(&self, core: &str, units: &[&str]) {
        let unit_list = units
            .iter()
            .map(|u| format!("\"{u}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let manifest = format!(
            r#"
[project]
name = "test-project"
core = "{core}"
units = [{unit_list}]
output_dir = "dist"

[build]
command = "sh"
args = ["-c", "touch built.stamp; test ! -f fail.marker"]
descriptor = "package.json"
"#
        );
        self.create_file("orbit.toml", &manifest);
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
