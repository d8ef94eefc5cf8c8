//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the core unit, then every satellite unit in order
    Build {
        /// Project directory (defaults to the current directory)
        path: Option<PathBuf>,

        /// Exit non-zero if any satellite unit failed
        #[arg(long)]
        strict: bool,

        /// Show the build tool's own output instead of discarding it
        #[arg(long)]
        show_output: bool,
    },

    /// Validate the manifest and unit layout without building
    Check {
        /// Project directory (defaults to the current directory)
        path: Option<PathBuf>,
    },
}

impl Commands {
    /// Run the selected command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build {
                path,
                strict,
                show_output,
            } => {
                let project_dir = resolve_dir(path)?;
                build::execute(
                    &project_dir,
                    build::BuildOptions {
                        strict,
                        show_output,
                    },
                )
                .await
            }
            Self::Check { path } => {
                let project_dir = resolve_dir(path)?;
                check::execute(&project_dir)
            }
        }
    }
}

fn resolve_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}
