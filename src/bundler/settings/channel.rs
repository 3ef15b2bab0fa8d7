//! Release channel selection.

use std::{fmt, str::FromStr};

/// Build variant being packaged.
///
/// Selects the `{channel}-build/` source folder and the channel segment of
/// every output name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Stable release builds.
    Stable,
    /// Preview release builds.
    Preview,
}

impl Channel {
    /// Canonical spelling used in paths and output names.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Stable => "Stable",
            Channel::Preview => "Preview",
        }
    }

    /// Name of the build-output folder for this channel.
    pub fn build_dir_name(self) -> String {
        format!("{}-build", self.as_str())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    /// Case-insensitive match against `Stable` and `Preview`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Channel::Stable, Channel::Preview]
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid channel {s:?}, expected Stable or Preview"))
    }
}
