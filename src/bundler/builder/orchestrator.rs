//! Main pipeline orchestration.
//!
//! Runs resolve, stage, map, assemble and emit in sequence. Each stage
//! completes before the next starts and the first failure ends the run.

use super::checksum::calculate_sha256;
use crate::bundler::{
    Error, Settings,
    error::ErrorExt,
    package::{self, IdGenerator},
    platform::windows::wix::{self, Emitted},
    stage, version,
};
use std::fmt;

/// Pipeline stage, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the launcher's file version.
    ResolveVersion,
    /// Copying the publish tree into the staging directory.
    StageFiles,
    /// Mapping the staged application directory.
    MapTree,
    /// Building the package model.
    AssembleModel,
    /// Writing the script and compiling the installer.
    Emit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::ResolveVersion => "resolve version",
            Stage::StageFiles => "stage files",
            Stage::MapTree => "map tree",
            Stage::AssembleModel => "assemble model",
            Stage::Emit => "emit",
        })
    }
}

/// A stage failure.
#[derive(Debug, thiserror::Error)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    /// Stage that failed.
    pub stage: Stage,
    /// Underlying error.
    #[source]
    pub source: Error,
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, StageError>;
}

impl<T> AtStage<T> for crate::bundler::Result<T> {
    fn at(self, stage: Stage) -> Result<T, StageError> {
        self.map_err(|source| StageError { stage, source })
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Resolved application version.
    pub version: version::Version,
    /// What was written.
    pub emitted: Emitted,
    /// Size of the primary artifact in bytes.
    pub size: u64,
    /// SHA256 of the primary artifact.
    pub checksum: String,
}

/// Main pipeline orchestrator.
///
/// # Examples
///
/// ```no_run
/// use collapse_setup::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> Result<(), collapse_setup::bundler::StageError> {
/// let artifact = Bundler::new(settings).bundle().await?;
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every stage and returns the emitted artifact.
    pub async fn bundle(&self) -> Result<BundledArtifact, StageError> {
        let settings = &self.settings;

        let version = version::resolve(&settings.version_binary())
            .await
            .at(Stage::ResolveVersion)?;
        log::info!("Packaging {} {}", settings.channel(), version);

        let staged = stage::stage_files(settings, &version)
            .await
            .at(Stage::StageFiles)?;

        let mut ids = IdGenerator::new();
        let app_tree = package::map_directory(&staged.app_directory, &staged.root, &mut ids)
            .at(Stage::MapTree)?;

        let model = package::assemble(settings, &version, &staged, app_tree, &mut ids)
            .at(Stage::AssembleModel)?;

        let emitted = wix::emit(&model, settings).await.at(Stage::Emit)?;

        let artifact = emitted.artifact();
        let size = tokio::fs::metadata(artifact)
            .await
            .fs_context("reading artifact metadata", artifact)
            .at(Stage::Emit)?
            .len();
        let checksum = calculate_sha256(artifact).await.at(Stage::Emit)?;

        log::info!(
            "✓ {} ({} bytes, sha256 {})",
            artifact.display(),
            size,
            checksum
        );

        Ok(BundledArtifact {
            version,
            emitted,
            size,
            checksum,
        })
    }
}
