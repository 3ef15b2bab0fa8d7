//! File system utilities for staging.
//!
//! Overwriting copies with automatic directory creation and path-aware
//! error reporting.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::fs;

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// An existing destination file is overwritten.
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    log::debug!("Copied {} -> {}", from.display(), to.display());
    Ok(())
}

/// Recursively copies a directory into another, creating the destination
/// and any missing subdirectories.
///
/// Existing files at the destination are overwritten; nothing is deleted.
/// Symbolic links are followed and their targets copied.
/// Fails if the source path is not a directory or doesn't exist.
///
/// Returns the number of files copied.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a directory")));
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<usize> {
        let mut copied = 0;
        for entry in walkdir::WalkDir::new(&from).follow_links(true) {
            let entry = entry?;
            debug_assert!(entry.path().starts_with(&from));
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                if !dest_path.is_dir() {
                    std::fs::create_dir_all(&dest_path)
                        .fs_context("creating directory", &dest_path)?;
                }
            } else {
                std::fs::copy(entry.path(), &dest_path)
                    .fs_context("copying file", entry.path())?;
                log::debug!("Copied {}", rel_path.display());
                copied += 1;
            }
        }
        Ok(copied)
    })
    .await?
}
