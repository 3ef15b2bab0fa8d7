//! Staging of the publish directory.
//!
//! Mirrors `{source}/{channel}-build/` into `{work}/app/app-{version}/` and
//! places the icon, launcher and updater at `{work}/app/`. Every run rewrites
//! every file; nothing is removed, so a failed run leaves a partial tree for
//! the next run to overwrite.

use crate::bundler::{
    Result, Settings,
    error::Context,
    utils::fs::{copy_dir, copy_file},
    version::Version,
};
use std::path::PathBuf;

/// Paths of a populated staging tree.
#[derive(Clone, Debug)]
pub struct StagedTree {
    /// `{work}/app`
    pub root: PathBuf,
    /// `{work}/app/app-{version}`
    pub app_directory: PathBuf,
    /// `{work}/app/{icon}`
    pub icon: PathBuf,
    /// `{work}/app/{launcher}`
    pub launcher: PathBuf,
    /// `{work}/app/{updater}`
    pub updater: PathBuf,
}

/// Copy the channel build output and loose files into the staging tree.
pub async fn stage_files(settings: &Settings, version: &Version) -> Result<StagedTree> {
    let build_dir = settings.channel_build_directory();
    let root = settings.staging_directory();
    let app_directory = settings.versioned_app_directory(version);

    log::info!(
        "Staging {} -> {}",
        build_dir.display(),
        app_directory.display()
    );

    let copied = copy_dir(&build_dir, &app_directory)
        .await
        .with_context(|| format!("staging build output from {}", build_dir.display()))?;

    let package = settings.package();
    let icon = root.join(&package.icon);
    let launcher = root.join(&package.launcher);
    let updater = root.join(&package.updater);

    for (name, to) in [
        (&package.icon, &icon),
        (&package.launcher, &launcher),
        (&package.updater, &updater),
    ] {
        let from = settings.source_directory().join(name);
        copy_file(&from, to)
            .await
            .with_context(|| format!("staging {name}"))?;
    }

    log::info!("✓ Staged {copied} build files and 3 loose files");

    Ok(StagedTree {
        root,
        app_directory,
        icon,
        launcher,
        updater,
    })
}
