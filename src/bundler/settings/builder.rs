//! Builder for constructing Settings.

use super::{Channel, PackageSettings, Settings, WixSettings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use collapse_setup::bundler::{Channel, SettingsBuilder};
///
/// # fn example() -> collapse_setup::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_directory(r"C:\publish")
///     .channel(Channel::Preview)
///     .working_directory("out")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_directory: Option<PathBuf>,
    channel: Option<Channel>,
    wsx_only: bool,
    working_directory: Option<PathBuf>,
    package: PackageSettings,
    wix: WixSettings,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the publish directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the channel.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Emit only the definition script instead of compiling an MSI.
    ///
    /// Default: false
    pub fn wsx_only(mut self, wsx_only: bool) -> Self {
        self.wsx_only = wsx_only;
        self
    }

    /// Sets the directory receiving the staging tree and outputs.
    ///
    /// Default: "."
    pub fn working_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.working_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets product metadata.
    ///
    /// Default: [`PackageSettings::default`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package = settings;
        self
    }

    /// Sets installer configuration.
    ///
    /// Default: [`WixSettings::default`]
    pub fn wix_settings(mut self, settings: WixSettings) -> Self {
        self.wix = settings;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `source_directory`
    /// - `channel`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        Ok(Settings::new(
            self.source_directory
                .context("source_directory is required")?,
            self.channel.context("channel is required")?,
            self.wsx_only,
            self.working_directory
                .unwrap_or_else(|| PathBuf::from(".")),
            self.package,
            self.wix,
        ))
    }
}
