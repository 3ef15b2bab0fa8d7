//! Installer packaging for the Collapse Launcher publish tree.
//!
//! Resolves the launcher version, stages the channel build output, maps the
//! staged tree into a package model and emits a WiX source (optionally
//! compiled into an `.msi`).
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Resolve version | `version` | [`Version`] |
//! | Stage files | `stage` | [`StagedTree`] |
//! | Map tree | `package` | [`Directory`] |
//! | Assemble model | `package` | [`PackageModel`] |
//! | Emit | `platform::windows::wix` | [`Emitted`] |
//!
//! ```no_run
//! use collapse_setup::bundler::{Bundler, Channel, SettingsBuilder};
//!
//! # async fn example() -> Result<(), collapse_setup::bundler::StageError> {
//! let settings = SettingsBuilder::new()
//!     .source_directory("publish")
//!     .channel(Channel::Preview)
//!     .wsx_only(true)
//!     .build()
//!     .expect("settings");
//!
//! let artifact = Bundler::new(settings).bundle().await?;
//! println!("{} ({})", artifact.emitted.artifact().display(), artifact.checksum);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
pub mod error;
pub mod package;
pub mod platform;
mod settings;
pub mod stage;
mod utils;
pub mod version;

// Public re-exports
pub use builder::{BundledArtifact, Bundler, Stage, StageError, calculate_sha256};
pub use error::{Error, Result};
pub use package::{Directory, PackageModel};
pub use platform::windows::wix::Emitted;
pub use settings::{
    Arch, Channel, InstallScope, PRODUCT_GUID, PackageSettings, Settings, SettingsBuilder,
    WixSettings, WixUiMode,
};
pub use stage::StagedTree;
pub use version::Version;
