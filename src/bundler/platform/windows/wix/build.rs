//! WiX installer build execution.
//!
//! Compiles a `.wxs` source into an `.msi` with `wix build`.

use super::utils;
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::Arch,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// WiX extension providing the wizard dialog sets.
const UI_EXTENSION: &str = "WixToolset.UI.wixext";

/// Paths for one `wix build` invocation.
#[derive(Debug, Clone)]
pub struct BuildPaths {
    /// Source to compile.
    pub wxs: PathBuf,
    /// Installer to produce.
    pub msi: PathBuf,
    /// Debug symbols, kept next to the installer.
    pub pdb: PathBuf,
    /// Intermediate object directory, kept after the build.
    pub intermediate: PathBuf,
}

/// Command-line arguments for `wix build`.
pub fn build_args(paths: &BuildPaths, arch: Arch) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "build".into(),
        "-arch".into(),
        utils::map_arch(arch).into(),
        "-ext".into(),
        UI_EXTENSION.into(),
        "-intermediatefolder".into(),
    ];
    args.push(paths.intermediate.clone().into_os_string());
    args.push("-pdb".into());
    args.push(paths.pdb.clone().into_os_string());
    args.push("-o".into());
    args.push(paths.msi.clone().into_os_string());
    args.push(paths.wxs.clone().into_os_string());
    args
}

/// Run `wix build`, capturing its output.
///
/// A non-zero exit is returned as [`Error::Toolchain`] carrying everything
/// the compiler printed.
pub async fn run_wix(wix: &Path, paths: &BuildPaths, arch: Arch) -> Result<()> {
    log::info!("Running wix build...");

    tokio::fs::create_dir_all(&paths.intermediate)
        .await
        .fs_context("creating intermediate directory", &paths.intermediate)?;

    let output = tokio::process::Command::new(wix)
        .args(build_args(paths, arch))
        .output()
        .await
        .map_err(|e| Error::CommandFailed {
            command: wix.display().to_string(),
            error: e,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stdout.lines().chain(stderr.lines()) {
        log::debug!("wix: {line}");
    }

    if !output.status.success() {
        return Err(Error::Toolchain {
            tool: "wix build".to_string(),
            status: output.status,
            diagnostics: format!("{stdout}{stderr}"),
        });
    }

    Ok(())
}

/// Delete the intermediate directory and debug database of a finished build.
pub async fn remove_intermediates(paths: &BuildPaths) -> Result<()> {
    if tokio::fs::try_exists(&paths.intermediate).await.unwrap_or(false) {
        tokio::fs::remove_dir_all(&paths.intermediate)
            .await
            .fs_context("removing intermediate directory", &paths.intermediate)?;
    }
    if tokio::fs::try_exists(&paths.pdb).await.unwrap_or(false) {
        tokio::fs::remove_file(&paths.pdb)
            .await
            .fs_context("removing debug database", &paths.pdb)?;
    }
    log::debug!("Removed wix intermediates");
    Ok(())
}
