//! `VS_FIXEDFILEINFO` extraction from PE images.
//!
//! goblin finds the resource table through the resource data directory and
//! decodes the version resource; only the fixed file version is used here.

use crate::bundler::error::{Error, Result};
use std::path::PathBuf;

/// Read the `[major, minor, build, revision]` file version from a PE image.
pub fn read_file_version(bytes: &[u8]) -> Result<[u16; 4]> {
    let pe = goblin::pe::PE::parse(bytes)?;

    let fixed = pe
        .resource_data
        .as_ref()
        .ok_or_else(|| missing("no resource table"))?
        .version_info
        .as_ref()
        .and_then(|info| info.fixed_info.as_ref())
        .ok_or_else(|| missing("no VS_FIXEDFILEINFO resource"))?;

    // the MS/LS fields directly; `VsFixedFileInfo::file_version()` reads the date fields
    Ok(split_version(fixed.file_version_ms, fixed.file_version_ls))
}

/// `dwFileVersionMS`/`LS` as four 16-bit components.
fn split_version(ms: u32, ls: u32) -> [u16; 4] {
    [(ms >> 16) as u16, ms as u16, (ls >> 16) as u16, ls as u16]
}

fn missing(reason: &str) -> Error {
    Error::MissingVersionInfo {
        path: PathBuf::new(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_version() {
        assert_eq!(split_version(0x0001_0004, 0), [1, 4, 0, 0]);
        assert_eq!(split_version(0x0001_0052, 0x0003_0011), [1, 82, 3, 17]);
        assert_eq!(split_version(0xFFFF_0000, 0x0000_FFFF), [65535, 0, 0, 65535]);
    }

    #[test]
    fn test_not_a_pe_image() {
        assert!(matches!(
            read_file_version(b"not an executable"),
            Err(Error::BinaryParseError(_))
        ));
    }
}
