//! Error types for orbit
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Per-unit build failures
///
/// These are recorded into the outcome list and never abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The unit directory has no build descriptor
    #[error("no {descriptor} found in '{path}'")]
    MissingDescriptor { path: PathBuf, descriptor: String },

    /// The build command exited non-zero or could not be spawned
    #[error("build failed: {detail}")]
    BuildFailed { detail: String },
}

/// Top-level orbit error type
///
/// Everything here is fatal to the invocation; per-unit failures stay
/// inside [`UnitError`] and the outcome list.
#[derive(Error, Debug)]
pub enum OrbitError {
    /// The synchronous core build failed; orchestration never starts
    #[error("Core build failed for '{path}': {detail}")]
    CoreBuildFailed { path: PathBuf, detail: String },

    /// Manifest not found
    #[error("Manifest not found at '{path}'. Run orbit inside a project directory containing orbit.toml.")]
    ManifestNotFound { path: String },

    /// Manifest parse error
    #[error("Failed to parse manifest: {source}")]
    ManifestParse { source: toml::de::Error },

    /// Manifest validation error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// The run was stopped by a user interrupt
    ///
    /// Not a failure of any unit; outcomes recorded before the interrupt
    /// remain valid and have already been reported.
    #[error("Interrupted")]
    Interrupted,

    /// IO error
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for OrbitError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}
