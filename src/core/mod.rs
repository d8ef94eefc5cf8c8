//! Core business logic module
//!
//! This module contains the orchestration engine and its collaborators.
//! Terminal concerns live in [`crate::cli`]; only [`report::LiveRenderer`]
//! writes anywhere, and it writes to a caller-supplied writer.
//!
//! # Submodules
//!
//! - [`manifest`] - Manifest (orbit.toml) parsing and validation
//! - [`unit`] - Build units, outcomes, and queue construction
//! - [`executor`] - External build command invocation
//! - [`orchestrator`] - Sequential state machine and event loop
//! - [`report`] - Progress and summary rendering

pub mod executor;
pub mod manifest;
pub mod orchestrator;
pub mod report;
pub mod unit;
