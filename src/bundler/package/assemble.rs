//! Package assembly.
//!
//! Places the mapped application directory and the loose files under the
//! install root, attaches the shortcuts and fills in product metadata.

use super::{
    Directory, Entity, EntityKind, IdGenerator, Identifier, PackageModel, Shortcut,
    ShortcutLocation, ShortcutTarget, tree::map_file,
};
use crate::bundler::{
    Result, Settings,
    error::{Context, ErrorExt},
    stage::StagedTree,
    version::Version,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Compose the package model from the staged tree and the mapped app directory.
///
/// The license file is referenced but not checked beyond a warning; a missing
/// license is reported by the installer compiler.
pub fn assemble(
    settings: &Settings,
    version: &Version,
    staged: &StagedTree,
    app_tree: Directory,
    ids: &mut IdGenerator,
) -> Result<PackageModel> {
    log::info!("Assembling package model for {}", settings.product_name());

    let package = settings.package();
    let wix = settings.wix();

    let mut install_root = Directory::new(Identifier::install_dir(), &package.product_name);
    install_root.push(Entity::Directory(app_tree))?;
    for loose in [&staged.icon, &staged.launcher, &staged.updater] {
        install_root.push(Entity::File(map_file(loose, &staged.root, ids)?))?;
    }

    let launcher_id = install_root
        .file(&package.launcher)
        .map(|f| f.id.clone())
        .with_context(|| format!("{} missing from install root", package.launcher))?;

    let mut shortcut = |name: &str, target: ShortcutTarget, arguments: &str, location: ShortcutLocation| {
        let scope = match location {
            ShortcutLocation::StartMenu => "StartMenu",
            ShortcutLocation::Desktop => "Desktop",
        };
        Shortcut {
            id: ids.generate(EntityKind::Shortcut, name, &Path::new(scope).join(name)),
            name: name.to_string(),
            target,
            arguments: arguments.to_string(),
            location,
        }
    };

    let uninstall_name = format!("Uninstall {}", package.product_name);
    let shortcuts = vec![
        shortcut(
            package.product_name.as_str(),
            ShortcutTarget::File(launcher_id.clone()),
            "",
            ShortcutLocation::StartMenu,
        ),
        shortcut(
            package.product_name.as_str(),
            ShortcutTarget::File(launcher_id),
            "",
            ShortcutLocation::Desktop,
        ),
        shortcut(
            uninstall_name.as_str(),
            ShortcutTarget::Formatted("[System64Folder]msiexec.exe".into()),
            "/x [ProductCode]",
            ShortcutLocation::StartMenu,
        ),
    ];

    let license = absolute(&staged.app_directory.join(&package.license))?;
    if !license.is_file() {
        log::warn!(
            "License {} not found; the installer compiler will reject the package",
            license.display()
        );
    }

    let banner_image = absolute(&settings.working_directory().join(&wix.banner_path))?;
    let background_image = absolute(&settings.working_directory().join(&wix.dialog_image_path))?;
    for image in [&banner_image, &background_image] {
        if !image.is_file() {
            log::warn!("Wizard image {} not found", image.display());
        }
    }

    let model = PackageModel {
        product_guid: package.product_guid,
        product_name: package.product_name.clone(),
        manufacturer: package.manufacturer.clone(),
        comments: package.comments.clone(),
        help_link: package.help_link.clone(),
        readme_link: package.readme_link.clone(),
        contact: package.contact.clone(),
        icon: absolute(&staged.icon)?,
        license,
        banner_image,
        background_image,
        ui: wix.ui,
        scope: wix.scope,
        platform: wix.arch,
        language: wix.language.clone(),
        version: version.clone(),
        channel: settings.channel(),
        install_root,
        shortcuts,
    };

    log::info!(
        "✓ Package model holds {} files and {} shortcuts",
        model.install_root.all_files().len(),
        model.shortcuts.len()
    );

    Ok(model)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving absolute path", path)?
        .into_owned())
}
