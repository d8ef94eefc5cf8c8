//! Build units and outcomes
//!
//! A unit is a single buildable project directory. The queue of satellite
//! units is computed once, before orchestration starts, and is never
//! reordered afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::UnitError;

/// A single buildable project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildUnit {
    /// Filesystem path to the unit
    pub path: PathBuf,
}

impl BuildUnit {
    /// Create a unit from a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Display name for the unit (directory basename)
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Recorded result of building one unit
///
/// Exactly one outcome is produced per dispatched unit, in queue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutcome {
    /// The unit this outcome belongs to
    pub unit: BuildUnit,
    /// Whether the build command exited successfully
    pub success: bool,
    /// Wall time from spawn to exit
    pub duration: Duration,
    /// Failure detail when `success` is false
    pub error: Option<UnitError>,
}

impl UnitOutcome {
    /// Record a successful build
    pub fn success(unit: BuildUnit, duration: Duration) -> Self {
        Self {
            unit,
            success: true,
            duration,
            error: None,
        }
    }

    /// Record a failed build
    pub fn failure(unit: BuildUnit, duration: Duration, error: UnitError) -> Self {
        Self {
            unit,
            success: false,
            duration,
            error: Some(error),
        }
    }
}

/// Build the satellite queue from candidate paths
///
/// Excludes the core unit (built synchronously before orchestration) and
/// preserves the caller's ordering. Order is significant: outcomes are
/// recorded and reported in exactly this order.
pub fn build_queue(candidates: &[PathBuf], core: &Path) -> Vec<BuildUnit> {
    candidates
        .iter()
        .filter(|path| path.as_path() != core)
        .map(BuildUnit::new)
        .collect()
}
