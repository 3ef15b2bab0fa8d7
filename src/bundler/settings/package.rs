//! Product identity and staged file names.

use uuid::{Uuid, uuid};

/// Upgrade identity shared by every Collapse Launcher release.
pub const PRODUCT_GUID: Uuid = uuid!("1b671b04-ce52-4284-aaf1-1608c2761eea");

/// Product metadata and the names of the files the package is built from.
///
/// # Examples
///
/// ```no_run
/// use collapse_setup::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "Collapse Launcher".into(),
///     ..Default::default()
/// };
/// assert_eq!(settings.launcher, "CollapseLauncher.exe");
/// ```
#[derive(Debug, Clone)]
pub struct PackageSettings {
    /// Product name displayed to users.
    ///
    /// Also used as the install-directory and start-menu folder name.
    pub product_name: String,

    /// Manufacturer shown in Programs and Features.
    pub manufacturer: String,

    /// Comment shown in Programs and Features.
    pub comments: String,

    /// Support link (`ARPHELPLINK`).
    pub help_link: String,

    /// Readme link (`ARPREADME`).
    pub readme_link: String,

    /// Support contact (`ARPCONTACT`).
    pub contact: String,

    /// Product and upgrade code.
    ///
    /// Default: [`PRODUCT_GUID`]
    pub product_guid: Uuid,

    /// Launcher executable, also the source of the version number.
    pub launcher: String,

    /// Updater executable.
    pub updater: String,

    /// Application icon.
    pub icon: String,

    /// License shown by the installer wizard, looked up inside the versioned
    /// application folder.
    pub license: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "Collapse Launcher".into(),
            manufacturer: "Collapse Project Team".into(),
            comments: "Collapse Launcher, An Advanced Launcher for miHoYo/HoYoverse Games".into(),
            help_link: "https://github.com/CollapseLauncher/Collapse".into(),
            readme_link: "https://github.com/CollapseLauncher/Collapse/blob/main/README.md".into(),
            contact: "bagusnl+collapse@protonmail.com".into(),
            product_guid: PRODUCT_GUID,
            launcher: "CollapseLauncher.exe".into(),
            updater: "Update.exe".into(),
            icon: "icon.ico".into(),
            license: "LICENSE.rtf".into(),
        }
    }
}
