//! Package model handed to the emitter.

use super::{Directory, Identifier};
use crate::bundler::{
    settings::{Arch, Channel, InstallScope, WixUiMode},
    version::Version,
};
use std::path::PathBuf;
use uuid::Uuid;

/// Where a shortcut is installed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShortcutLocation {
    /// `ProgramMenuFolder\{product}`
    StartMenu,
    /// `DesktopFolder`
    Desktop,
}

/// What a shortcut launches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShortcutTarget {
    /// A file of the package, referenced by its identifier.
    File(Identifier),
    /// A formatted installer path such as `[System64Folder]msiexec.exe`.
    Formatted(String),
}

impl ShortcutTarget {
    /// Installer formatted-string form of the target.
    pub fn formatted(&self) -> String {
        match self {
            ShortcutTarget::File(id) => format!("[#{id}]"),
            ShortcutTarget::Formatted(s) => s.clone(),
        }
    }
}

/// A shortcut attached to the install root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shortcut {
    /// Shortcut identifier.
    pub id: Identifier,
    /// Display name.
    pub name: String,
    /// Launch target.
    pub target: ShortcutTarget,
    /// Command-line arguments, empty for none.
    pub arguments: String,
    /// Install location.
    pub location: ShortcutLocation,
}

/// Complete description of one installer package.
#[derive(Clone, Debug)]
pub struct PackageModel {
    /// Product and upgrade code.
    pub product_guid: Uuid,
    /// Product name.
    pub product_name: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Programs and Features comment.
    pub comments: String,
    /// Support link.
    pub help_link: String,
    /// Readme link.
    pub readme_link: String,
    /// Support contact.
    pub contact: String,
    /// Product icon (staged copy).
    pub icon: PathBuf,
    /// License shown by the wizard.
    pub license: PathBuf,
    /// Wizard banner image.
    pub banner_image: PathBuf,
    /// Wizard background image.
    pub background_image: PathBuf,
    /// Dialog set.
    pub ui: WixUiMode,
    /// Install scope.
    pub scope: InstallScope,
    /// Target platform.
    pub platform: Arch,
    /// Installer language tag.
    pub language: String,
    /// Application version.
    pub version: Version,
    /// Channel being packaged.
    pub channel: Channel,
    /// Install root (`INSTALLDIR`) and everything below it.
    pub install_root: Directory,
    /// Start-menu and desktop shortcuts.
    pub shortcuts: Vec<Shortcut>,
}

impl PackageModel {
    /// Shortcuts installed at `location`.
    pub fn shortcuts_at(&self, location: ShortcutLocation) -> impl Iterator<Item = &Shortcut> {
        self.shortcuts.iter().filter(move |s| s.location == location)
    }
}
