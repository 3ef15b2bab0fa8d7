//! WiX toolset location.
//!
//! Locates the system-installed `wix` dotnet tool.

use crate::bundler::error::{Error, Result};
use std::path::PathBuf;

/// Name of the WiX v4 command-line driver.
pub const WIX: &str = "wix";

/// Locate the `wix` executable on `PATH`.
pub fn get_wix_toolset() -> Result<PathBuf> {
    match which::which(WIX) {
        Ok(path) => {
            log::debug!("Found wix at: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("wix not found in PATH: {e}");
            Err(Error::ToolNotFound(format!(
                "{WIX} (install with `dotnet tool install --global wix`)"
            )))
        }
    }
}
