//! CPU architecture types.

/// CPU architecture of the packaged application.
///
/// Collapse Launcher ships x64 builds only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64
    #[default]
    X86_64,
}
