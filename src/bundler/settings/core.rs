//! Core Settings struct and implementations.

use super::{Channel, PackageSettings, WixSettings};
use crate::bundler::version::Version;
use std::path::{Path, PathBuf};

/// Main settings for one packaging run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Holds the
/// invocation inputs (source directory, channel, output mode), the working
/// directory all outputs are written under, and the fixed product metadata.
///
/// # Examples
///
/// ```no_run
/// use collapse_setup::bundler::{Channel, SettingsBuilder};
///
/// # fn example() -> collapse_setup::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_directory("publish")
///     .channel(Channel::Stable)
///     .wsx_only(true)
///     .build()?;
/// assert_eq!(settings.channel_build_directory(), std::path::Path::new("publish/Stable-build"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Publish directory holding `{channel}-build/` and the loose files.
    source_directory: PathBuf,

    /// Channel being packaged.
    channel: Channel,

    /// Emit only the definition script.
    wsx_only: bool,

    /// Directory receiving the staging tree and every output.
    working_directory: PathBuf,

    /// Product metadata.
    package: PackageSettings,

    /// Installer configuration.
    wix: WixSettings,
}

impl Settings {
    /// Returns the publish directory.
    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// Returns the channel.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Whether only the definition script is emitted.
    pub fn wsx_only(&self) -> bool {
        self.wsx_only
    }

    /// Returns the working directory.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Returns the product metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the installer configuration.
    pub fn wix(&self) -> &WixSettings {
        &self.wix
    }

    /// `{source}/{channel}-build`
    pub fn channel_build_directory(&self) -> PathBuf {
        self.source_directory.join(self.channel.build_dir_name())
    }

    /// Launcher executable in the publish directory; carries the version.
    pub fn version_binary(&self) -> PathBuf {
        self.source_directory.join(&self.package.launcher)
    }

    /// `{work}/app`
    pub fn staging_directory(&self) -> PathBuf {
        self.working_directory.join("app")
    }

    /// `{work}/app/app-{version}`
    pub fn versioned_app_directory(&self, version: &Version) -> PathBuf {
        self.staging_directory()
            .join(format!("app-{}", version.to_short_string()))
    }

    /// Stem shared by every output file: `CL-{channel}-{version}`.
    pub fn output_stem(&self, version: &Version) -> String {
        format!("CL-{}-{}", self.channel, version.to_short_string())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        source_directory: PathBuf,
        channel: Channel,
        wsx_only: bool,
        working_directory: PathBuf,
        package: PackageSettings,
        wix: WixSettings,
    ) -> Self {
        Self {
            source_directory,
            channel,
            wsx_only,
            working_directory,
            package,
            wix,
        }
    }
}
