//! Windows installer settings.

use super::Arch;
use std::path::PathBuf;

/// WiX MSI installer configuration.
///
/// WiX creates Windows Installer (.msi) packages from `.wxs` sources.
///
/// # See Also
///
/// - [`WixUiMode`] - Wizard dialog set
/// - [`InstallScope`] - Installation scope
#[derive(Clone, Debug)]
pub struct WixSettings {
    /// Installer language tag.
    ///
    /// Default: "en-US"
    pub language: String,

    /// Dialog set shown by the installer.
    ///
    /// Default: [`WixUiMode::InstallDir`]
    pub ui: WixUiMode,

    /// Installation scope.
    ///
    /// Default: [`InstallScope::PerMachine`]
    pub scope: InstallScope,

    /// Target platform of the package.
    ///
    /// Default: [`Arch::X86_64`]
    pub arch: Arch,

    /// Path to banner image (493×58 pixels), relative to the working directory.
    ///
    /// Shown at top of installer dialogs.
    pub banner_path: PathBuf,

    /// Path to dialog image (493×312 pixels), relative to the working directory.
    ///
    /// Shown on installer welcome screen.
    pub dialog_image_path: PathBuf,

    /// Keep compiler intermediates and the debug database next to the MSI.
    ///
    /// Default: true
    pub preserve_intermediates: bool,
}

impl Default for WixSettings {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
            ui: WixUiMode::default(),
            scope: InstallScope::default(),
            arch: Arch::default(),
            banner_path: PathBuf::from("WizardBannerDesignSmall.png"),
            dialog_image_path: PathBuf::from("WizardBannerDesign.png"),
            preserve_intermediates: true,
        }
    }
}

/// WiX UI dialog set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WixUiMode {
    /// License page followed by a directory chooser.
    #[default]
    InstallDir,

    /// License page and install button only.
    Minimal,
}

/// Installation scope.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InstallScope {
    /// Per-machine installation (requires admin rights).
    ///
    /// Installs to `%ProgramFiles%`.
    #[default]
    PerMachine,

    /// Per-user installation (no admin rights required).
    PerUser,
}
