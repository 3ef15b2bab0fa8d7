//! Windows Installer (MSI) creation with the WiX toolset.
//!
//! # Module Organization
//!
//! - `template` - WiX source template
//! - `script` - `.wxs` generation from the package model
//! - `toolset` - `wix` executable location
//! - `build` - `wix build` execution
//! - `utils` - Helper functions (architecture, scope, UI and language mapping)

mod build;
mod script;
mod template;
mod toolset;
mod utils;

pub use build::{BuildPaths, build_args};
pub use script::{render_wxs, write_wxs};
pub use toolset::get_wix_toolset;

use crate::bundler::{Result, Settings, package::PackageModel};
use std::path::PathBuf;

/// Suffix of the definition script file name.
pub const SCRIPT_SUFFIX: &str = "_InstallerScript.wsx";

/// Output of the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// Only the definition script was written.
    Script(PathBuf),
    /// The script was written and compiled into an installer.
    Installer {
        /// Definition script.
        script: PathBuf,
        /// Compiled `.msi`.
        msi: PathBuf,
    },
}

impl Emitted {
    /// Primary artifact: the installer when built, the script otherwise.
    pub fn artifact(&self) -> &PathBuf {
        match self {
            Emitted::Script(script) => script,
            Emitted::Installer { msi, .. } => msi,
        }
    }
}

/// Write the definition script and, unless `wsx_only` is set, build the installer.
///
/// All outputs land in the working directory under the stem
/// `CL-{channel}-{version}`.
pub async fn emit(model: &PackageModel, settings: &Settings) -> Result<Emitted> {
    let work = settings.working_directory();
    let stem = settings.output_stem(&model.version);
    let script = work.join(format!("{stem}{SCRIPT_SUFFIX}"));

    script::write_wxs(model, &script).await?;

    if settings.wsx_only() {
        return Ok(Emitted::Script(script));
    }

    let wix = toolset::get_wix_toolset()?;
    let paths = BuildPaths {
        wxs: script.clone(),
        msi: work.join(format!("{stem}.msi")),
        pdb: work.join(format!("{stem}.wixpdb")),
        intermediate: work.join("obj"),
    };
    build::run_wix(&wix, &paths, model.platform).await?;

    if !settings.wix().preserve_intermediates {
        build::remove_intermediates(&paths).await?;
    }

    log::info!("✓ Created installer: {}", paths.msi.display());

    Ok(Emitted::Installer {
        script,
        msi: paths.msi,
    })
}
