//! Build command implementation
//!
//! Implements `orbit build`: builds the core unit synchronously, then
//! drives the satellite queue through the orchestration loop and prints
//! the aggregate summary.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::executor::Executor;
use crate::core::manifest::Manifest;
use crate::core::orchestrator::{self, OrchestrationState};
use crate::core::report::{self, AggregateReport, LiveRenderer};
use crate::core::unit::build_queue;
use crate::error::OrbitError;

/// Build options
pub struct BuildOptions {
    /// Exit non-zero when any satellite unit failed
    pub strict: bool,
    /// Let the build tool's own output through
    pub show_output: bool,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let manifest = Manifest::load(project_dir)?;
    tracing::info!("Building project: {}", manifest.project.name);

    let executor = Executor::from_config(&manifest.build)
        .with_capture(manifest.build.capture_output || options.show_output);

    // The core unit is built synchronously before the loop exists; its
    // failure aborts the whole operation.
    build_core(project_dir, &manifest, &executor)?;

    let core_path = project_dir.join(&manifest.project.core);
    let candidates: Vec<PathBuf> = manifest
        .project
        .units
        .iter()
        .map(|unit| project_dir.join(unit))
        .collect();
    let queue = build_queue(&candidates, &core_path);
    tracing::info!("Building {} satellite units", queue.len());

    let state = OrchestrationState::new(queue, project_dir.join(&manifest.project.output_dir));
    let mut renderer = LiveRenderer::new(std::io::stdout());
    let state = orchestrator::run(state, executor, &mut renderer).await?;

    if state.was_interrupted() {
        return Err(OrbitError::Interrupted.into());
    }

    let aggregate = AggregateReport::from_outcomes(state.results());
    if options.strict && aggregate.failed > 0 {
        bail!("{} satellite unit(s) failed", aggregate.failed);
    }
    Ok(())
}

fn build_core(project_dir: &Path, manifest: &Manifest, executor: &Executor) -> Result<()> {
    let core_path = project_dir.join(&manifest.project.core);
    let spinner = output::create_spinner(&format!("building core: {}", manifest.project.core));
    match executor.build_core(&core_path) {
        Ok(duration) => {
            spinner.finish_with_message(format!(
                "{} core built ({})",
                report::glyph::SUCCESS,
                report::format_duration(duration)
            ));
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e.into())
        }
    }
}
