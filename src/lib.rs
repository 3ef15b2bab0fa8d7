//! Collapse Launcher setup toolkit.
//!
//! Packages a published Collapse Launcher build into a Windows installer:
//! resolves the launcher version, stages the channel build output, maps it
//! into a WiX package model and writes the WiX source (optionally compiled
//! into an `.msi`).
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{Result, SetupError, UsageError};
