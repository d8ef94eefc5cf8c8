//! Check command implementation
//!
//! Implements `orbit check`: validates the manifest and reports which
//! unit directories and descriptors are in place, without building.

use anyhow::{bail, Result};
use std::path::Path;

use crate::core::manifest::Manifest;
use crate::core::report::glyph;

/// Execute the check command
pub fn execute(project_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(project_dir)?;
    println!("{} manifest ok: {}", glyph::SUCCESS, manifest.project.name);

    let mut problems = 0;

    match which::which(&manifest.build.command) {
        Ok(resolved) => println!(
            "{} build command: {} ({})",
            glyph::SUCCESS,
            manifest.build.command,
            resolved.display()
        ),
        Err(_) => {
            println!(
                "{} build command '{}' not found in PATH",
                glyph::FAILURE,
                manifest.build.command
            );
            problems += 1;
        }
    }

    let mut unit_paths = vec![manifest.project.core.clone()];
    unit_paths.extend(manifest.project.units.iter().cloned());

    for unit in &unit_paths {
        let dir = project_dir.join(unit);
        if !dir.is_dir() {
            println!("{} {unit}: directory missing", glyph::FAILURE);
            problems += 1;
        } else if !dir.join(&manifest.build.descriptor).exists() {
            println!(
                "{} {unit}: no {} found",
                glyph::FAILURE,
                manifest.build.descriptor
            );
            problems += 1;
        } else {
            println!("{} {unit}", glyph::SUCCESS);
        }
    }

    if problems > 0 {
        bail!("{problems} problem(s) found");
    }
    println!("{} {} unit(s) ready to build", glyph::SUCCESS, unit_paths.len());
    Ok(())
}
