//! Orbit - sequential multi-unit build orchestrator
//!
//! Builds a project's designated core unit first, then drives an ordered
//! queue of satellite units through a strictly sequential event loop,
//! recording per-unit outcome and timing and rendering live progress.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Orchestration engine, executor, manifest, rendering
//! - [`error`] - Error types and handling

pub mod cli;
pub mod core;
pub mod error;

#[cfg(test)]
pub mod test_utils;
