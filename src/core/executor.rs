//! External build executor
//!
//! Spawns the configured build command inside a unit directory, measures
//! wall time, and classifies the result. Per-unit failures are data, not
//! control flow: `execute` never returns an error, it returns a failed
//! outcome and the orchestrator moves on to the next unit.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use crate::core::manifest::BuildConfig;
use crate::core::unit::{BuildUnit, UnitOutcome};
use crate::error::{OrbitError, UnitError};

/// Invokes the external build command for one unit at a time
#[derive(Debug, Clone)]
pub struct Executor {
    command: String,
    args: Vec<String>,
    descriptor: String,
    capture_output: bool,
}

impl Executor {
    /// Create an executor from the manifest's build configuration
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            descriptor: config.descriptor.clone(),
            capture_output: config.capture_output,
        }
    }

    /// Override the output capture policy
    #[must_use]
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// The configured build command name
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The per-unit build descriptor file name
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Build one satellite unit
    ///
    /// Checks for the build descriptor, spawns the build command with the
    /// unit directory as cwd, and waits for it to exit. stdout/stderr are
    /// discarded unless output capture is enabled.
    pub async fn execute(&self, unit: BuildUnit) -> UnitOutcome {
        let started = Instant::now();

        if !unit.path.join(&self.descriptor).exists() {
            tracing::debug!("unit {} has no {}", unit.name(), self.descriptor);
            let error = UnitError::MissingDescriptor {
                path: unit.path.clone(),
                descriptor: self.descriptor.clone(),
            };
            return UnitOutcome::failure(unit, started.elapsed(), error);
        }

        let mut command = tokio::process::Command::new(&self.command);
        command
            .args(&self.args)
            .current_dir(&unit.path)
            .stdin(Stdio::null());
        self.apply_output_policy_tokio(&mut command);

        match command.status().await {
            Ok(status) if status.success() => {
                let duration = started.elapsed();
                tracing::debug!("unit {} built in {:.1}s", unit.name(), duration.as_secs_f64());
                UnitOutcome::success(unit, duration)
            }
            Ok(status) => {
                let error = UnitError::BuildFailed {
                    detail: exit_detail(status.code()),
                };
                UnitOutcome::failure(unit, started.elapsed(), error)
            }
            Err(e) => {
                let error = UnitError::BuildFailed {
                    detail: format!("failed to spawn '{}': {e}", self.command),
                };
                UnitOutcome::failure(unit, started.elapsed(), error)
            }
        }
    }

    /// Build the core unit synchronously
    ///
    /// This is the pre-step that runs before the orchestration loop is
    /// constructed. Any failure here is fatal to the whole operation.
    pub fn build_core(&self, core_path: &Path) -> Result<Duration, OrbitError> {
        let fatal = |detail: String| OrbitError::CoreBuildFailed {
            path: core_path.to_path_buf(),
            detail,
        };

        if !core_path.join(&self.descriptor).exists() {
            return Err(fatal(format!("no {} found", self.descriptor)));
        }

        let started = Instant::now();
        let mut command = std::process::Command::new(&self.command);
        command
            .args(&self.args)
            .current_dir(core_path)
            .stdin(Stdio::null());
        if self.capture_output {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = command
            .status()
            .map_err(|e| fatal(format!("failed to spawn '{}': {e}", self.command)))?;

        if status.success() {
            Ok(started.elapsed())
        } else {
            Err(fatal(exit_detail(status.code())))
        }
    }

    fn apply_output_policy_tokio(&self, command: &mut tokio::process::Command) {
        if self.capture_output {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
    }
}

fn exit_detail(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
