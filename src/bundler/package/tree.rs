//! Staged directory to entity tree mapping.

use super::{Directory, Entity, EntityKind, File, IdGenerator};
use crate::bundler::error::{Context, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::Path;
use walkdir::WalkDir;

/// Map the directory at `path` into a [`Directory`] named after its leaf.
///
/// Immediate files become [`File`] children, immediate subdirectories are
/// mapped recursively. Children are visited in file-name order so the
/// resulting tree (and any script rendered from it) is stable across runs.
/// Every entry is included; symbolic links are followed.
///
/// `staging_root` anchors the relative paths identifiers are derived from.
pub fn map_directory(path: &Path, staging_root: &Path, ids: &mut IdGenerator) -> Result<Directory> {
    let name = leaf_name(path)?;
    let relative = path.strip_prefix(staging_root)?;
    let mut directory = Directory::new(ids.generate(EntityKind::Directory, &name, relative), name);

    let mut files = Vec::new();
    let mut subdirectories = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            subdirectories.push(entry.into_path());
        } else {
            files.push(entry.into_path());
        }
    }

    for file in &files {
        directory.push(Entity::File(map_file(file, staging_root, ids)?))?;
    }
    for subdirectory in &subdirectories {
        let child = map_directory(subdirectory, staging_root, ids)?;
        directory.push(Entity::Directory(child))?;
    }

    log::debug!(
        "Mapped {} ({} files, {} directories)",
        relative.display(),
        files.len(),
        subdirectories.len()
    );

    Ok(directory)
}

/// Map a single staged file into a [`File`] entity.
pub fn map_file(path: &Path, staging_root: &Path, ids: &mut IdGenerator) -> Result<File> {
    let name = leaf_name(path)?;
    let relative = path.strip_prefix(staging_root)?;
    let source = path
        .absolutize()
        .fs_context("resolving absolute path", path)?
        .into_owned();

    Ok(File {
        id: ids.generate(EntityKind::File, &name, relative),
        name,
        source,
    })
}

fn leaf_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))
}
