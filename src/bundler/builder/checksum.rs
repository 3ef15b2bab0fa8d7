//! Artifact checksum calculation.
//!
//! SHA256 of the emitted artifact, reported after a successful run.

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates the SHA256 checksum of a file, read in 8KB chunks.
///
/// Returns 64 lowercase hex digits.
pub async fn calculate_sha256(file_path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(file_path)
        .await
        .fs_context("reading metadata for hashing", file_path)?;
    if !metadata.is_file() {
        bail!("Cannot hash {}: not a file", file_path.display());
    }

    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
