//! WiX utility functions.
//!
//! Helper functions for architecture, scope, UI and language mapping.

use crate::bundler::{
    error::{Error, Result},
    settings::{Arch, InstallScope, WixUiMode},
};

/// Map architecture to the `wix build -arch` value.
pub fn map_arch(arch: Arch) -> &'static str {
    match arch {
        Arch::X86_64 => "x64",
    }
}

/// Component `Bitness` for the package architecture.
pub fn map_bitness(arch: Arch) -> &'static str {
    match arch {
        Arch::X86_64 => "always64",
    }
}

/// Standard program-files directory for the package architecture.
pub fn program_files_folder(arch: Arch) -> &'static str {
    match arch {
        Arch::X86_64 => "ProgramFiles64Folder",
    }
}

/// Map install scope to the `Package/@Scope` value.
pub fn map_scope(scope: InstallScope) -> &'static str {
    match scope {
        InstallScope::PerMachine => "perMachine",
        InstallScope::PerUser => "perUser",
    }
}

/// Map UI mode to the WixUI dialog set id.
pub fn map_ui(ui: WixUiMode) -> &'static str {
    match ui {
        WixUiMode::InstallDir => "WixUI_InstallDir",
        WixUiMode::Minimal => "WixUI_Minimal",
    }
}

/// Map a language tag to its Windows LCID.
///
/// Only en-US (1033) is packaged; the tag is compared case-insensitively.
pub fn language_lcid(tag: &str) -> Result<u32> {
    if tag.eq_ignore_ascii_case("en-US") {
        Ok(1033)
    } else {
        Err(Error::GenericError(format!(
            "unsupported installer language: {tag}"
        )))
    }
}

/// Escape text for use inside a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    handlebars::html_escape(value)
}
