//! Orbit CLI - sequential multi-unit build orchestrator
//!
//! Entry point for the orbit command-line application.

use anyhow::Result;
use clap::Parser;

use orbit::cli::output::display_error;
use orbit::cli::Cli;
use orbit::error::OrbitError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            let code = match e.downcast_ref::<OrbitError>() {
                Some(OrbitError::Interrupted) => 130,
                _ => 1,
            };
            std::process::exit(code);
        }
    }
}
