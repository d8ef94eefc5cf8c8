//! Manifest (orbit.toml) parsing and validation
//!
//! The manifest is the main configuration file for an orbit project. It
//! names the core unit, the ordered list of satellite units, and the
//! external build command invoked per unit.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::OrbitError;

/// Manifest file name
pub const MANIFEST_NAME: &str = "orbit.toml";

/// The main project manifest (orbit.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Project configuration
    pub project: ProjectConfig,

    /// Build command configuration
    #[serde(default)]
    pub build: BuildConfig,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Path of the core unit, relative to the project directory
    pub core: String,

    /// Satellite unit paths, relative to the project directory.
    /// Order is significant and is preserved through the build.
    #[serde(default)]
    pub units: Vec<String>,

    /// Output directory reported in the build summary
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    "dist".to_string()
}

/// Build command configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildConfig {
    /// Command invoked in each unit directory
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments passed to the command
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Per-unit build descriptor checked before spawning
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Let the build command's stdout/stderr through instead of
    /// discarding it
    #[serde(default)]
    pub capture_output: bool,
}

fn default_command() -> String {
    "npm".to_string()
}

fn default_args() -> Vec<String> {
    vec!["run".to_string(), "build".to_string()]
}

fn default_descriptor() -> String {
    "package.json".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
            descriptor: default_descriptor(),
            capture_output: false,
        }
    }
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn from_toml(content: &str) -> Result<Self, OrbitError> {
        let manifest: Self =
            toml::from_str(content).map_err(|source| OrbitError::ManifestParse { source })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load the manifest from a project directory
    pub fn load(project_dir: &Path) -> Result<Self, OrbitError> {
        let path = project_dir.join(MANIFEST_NAME);
        if !path.exists() {
            return Err(OrbitError::ManifestNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Validate manifest invariants
    fn validate(&self) -> Result<(), OrbitError> {
        if self.project.name.trim().is_empty() {
            return Err(OrbitError::Manifest(
                "project.name must not be empty".to_string(),
            ));
        }
        if self.project.core.trim().is_empty() {
            return Err(OrbitError::Manifest(
                "project.core must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MANIFEST: &str = r#"
[project]
name = "my-app"
core = "core"
units = ["pkgs/a", "pkgs/b"]
output_dir = "build/out"

[build]
command = "yarn"
args = ["build"]
descriptor = "package.json"
capture_output = true
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::from_toml(FULL_MANIFEST).unwrap();
        assert_eq!(manifest.project.name, "my-app");
        assert_eq!(manifest.project.core, "core");
        assert_eq!(manifest.project.units, vec!["pkgs/a", "pkgs/b"]);
        assert_eq!(manifest.project.output_dir, "build/out");
        assert_eq!(manifest.build.command, "yarn");
        assert_eq!(manifest.build.args, vec!["build"]);
        assert!(manifest.build.capture_output);
    }

    #[test]
    fn test_build_section_defaults() {
        let manifest = Manifest::from_toml(
            r#"
[project]
name = "minimal"
core = "core"
"#,
        )
        .unwrap();
        assert_eq!(manifest.build.command, "npm");
        assert_eq!(manifest.build.args, vec!["run", "build"]);
        assert_eq!(manifest.build.descriptor, "package.json");
        assert!(!manifest.build.capture_output);
        assert_eq!(manifest.project.output_dir, "dist");
        assert!(manifest.project.units.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Manifest::from_toml(
            r#"
[project]
name = ""
core = "core"
"#,
        );
        assert!(matches!(result, Err(OrbitError::Manifest(_))));
    }

    #[test]
    fn test_empty_core_rejected() {
        let result = Manifest::from_toml(
            r#"
[project]
name = "app"
core = " "
"#,
        );
        assert!(matches!(result, Err(OrbitError::Manifest(_))));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = Manifest::from_toml("not [valid");
        assert!(matches!(result, Err(OrbitError::ManifestParse { .. })));
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Manifest::load(dir.path());
        assert!(matches!(result, Err(OrbitError::ManifestNotFound { .. })));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(MANIFEST_NAME), FULL_MANIFEST).unwrap();
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.project.name, "my-app");
    }
}
