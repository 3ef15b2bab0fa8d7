//! Application version discovery.
//!
//! Reads the file version embedded in the launcher executable and converts it
//! into the short dotted form used in staging paths and output names.
//!
//! # Module Organization
//!
//! - `pe` - fixed file version from the PE version resource

mod pe;

pub use pe::read_file_version;

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{fmt, path::Path, str::FromStr};

/// Numeric file version with two to four components.
///
/// Components are stored in `major.minor.build.revision` order; missing
/// trailing components are absent rather than zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u32>,
}

impl Version {
    /// Minimum number of components accepted from text.
    pub const MIN_COMPONENTS: usize = 2;
    /// Maximum number of components accepted from text.
    pub const MAX_COMPONENTS: usize = 4;

    /// Builds a four-component version, as stored in `VS_FIXEDFILEINFO`.
    pub fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            components: vec![major, minor, build, revision],
        }
    }

    /// Returns the components in order.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Short form used in directory and file names.
    ///
    /// Trailing zero components are dropped numerically, keeping at least the
    /// major component:
    /// - `1.2.0.0` -> `1.2`
    /// - `1.2.3.0` -> `1.2.3`
    /// - `1.0.0.0` -> `1`
    /// - `1.10.0.0` -> `1.10`
    /// - `2.5.3.4` -> `2.5.3.4`
    pub fn to_short_string(&self) -> String {
        let mut end = self.components.len();
        while end > 1 && self.components[end - 1] == 0 {
            end -= 1;
        }
        join(&self.components[..end])
    }

    /// Four-component form required by the MSI `ProductVersion` property.
    pub fn to_msi_string(&self) -> String {
        let mut parts = [0u32; 4];
        for (slot, value) in parts.iter_mut().zip(&self.components) {
            *slot = *value;
        }
        join(&parts)
    }
}

fn join(parts: &[u32]) -> String {
    parts
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.components))
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidVersion {
            input: input.to_string(),
            reason,
        };

        let components = input
            .trim()
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|e| invalid(format!("component {part:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        if !(Self::MIN_COMPONENTS..=Self::MAX_COMPONENTS).contains(&components.len()) {
            return Err(invalid(format!(
                "expected {} to {} components, found {}",
                Self::MIN_COMPONENTS,
                Self::MAX_COMPONENTS,
                components.len()
            )));
        }

        Ok(Self { components })
    }
}

/// Resolve the application version from `executable`.
///
/// Fails if the file is missing, is not a PE image, or carries no
/// `VS_FIXEDFILEINFO` resource.
pub async fn resolve(executable: &Path) -> Result<Version> {
    log::info!("Resolving version from {}", executable.display());

    let bytes = tokio::fs::read(executable)
        .await
        .fs_context("reading version binary", executable)?;

    let [major, minor, build, revision] =
        read_file_version(&bytes).map_err(|e| match e {
            Error::MissingVersionInfo { reason, .. } => Error::MissingVersionInfo {
                path: executable.to_path_buf(),
                reason,
            },
            other => other,
        })?;

    let version = Version::new(
        major.into(),
        minor.into(),
        build.into(),
        revision.into(),
    );
    log::info!("✓ File version {} (short {})", version, version.to_short_string());

    Ok(version)
}
