//! Installer back-ends.

pub mod windows;
