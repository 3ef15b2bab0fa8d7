//! Pipeline orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the packaging
//! stages in order and reports which stage failed.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum of the emitted artifact
//! - [`orchestrator`] - Main [`Bundler`] struct and stage sequencing

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{BundledArtifact, Bundler, Stage, StageError};
