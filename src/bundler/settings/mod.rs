//! Configuration structures for packaging runs.
//!
//! This module provides the run configuration ([`Settings`]), its builder,
//! product metadata and WiX installer settings.

mod arch;
mod builder;
mod channel;
mod core;
mod package;
mod windows;

// Re-export all public types
pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use channel::Channel;
pub use core::Settings;
pub use package::{PRODUCT_GUID, PackageSettings};
pub use windows::{InstallScope, WixSettings, WixUiMode};
