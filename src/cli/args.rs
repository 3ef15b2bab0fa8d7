//! Command line argument parsing and validation.
//!
//! The three positional arguments are taken as raw strings by clap and
//! validated here, so each kind of bad input maps to its own exit code.
//! Values may start with a hyphen and clap's own help and version flags are
//! off, so `-1` or `--help` reach validation like any other value.

use crate::{bundler::Channel, error::UsageError};
use clap::Parser;
use std::path::PathBuf;

/// One-line usage shown for every usage failure.
pub const USAGE: &str =
    "collapse_setup [Publish directory] [Stable/Preview] [Build WSX Only: true/false]";

/// Collapse Launcher installer packager
#[derive(Parser, Debug)]
#[command(
    name = "collapse_setup",
    about = "Stages a Collapse Launcher publish directory and emits a WiX installer",
    override_usage = USAGE,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Publish directory containing {channel}-build/ and the loose files
    #[arg(value_name = "PUBLISH_DIR", allow_hyphen_values = true)]
    pub publish_dir: PathBuf,

    /// Release channel: Stable or Preview (any casing)
    #[arg(value_name = "CHANNEL", allow_hyphen_values = true)]
    pub channel: String,

    /// Only write the WiX source: true or false (any casing)
    #[arg(value_name = "WSX_ONLY", allow_hyphen_values = true)]
    pub wsx_only: String,
}

/// Validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Publish directory.
    pub source_directory: PathBuf,
    /// Channel, in canonical spelling.
    pub channel: Channel,
    /// Emit only the definition script.
    pub wsx_only: bool,
}

impl Args {
    /// Validate channel then flag, in that order.
    pub fn validate(&self) -> Result<Invocation, UsageError> {
        let channel = self
            .channel
            .parse::<Channel>()
            .map_err(|_| UsageError::InvalidChannel(self.channel.clone()))?;

        let wsx_only = parse_flag(&self.wsx_only)
            .ok_or_else(|| UsageError::InvalidFlag(self.wsx_only.clone()))?;

        Ok(Invocation {
            source_directory: self.publish_dir.clone(),
            channel,
            wsx_only,
        })
    }
}

/// `true`/`false`, case-insensitive, surrounding whitespace ignored.
fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(channel: &str, flag: &str) -> Args {
        Args::try_parse_from(["collapse_setup", "publish", channel, flag]).unwrap()
    }

    #[test]
    fn test_channel_any_casing() {
        for (input, expected) in [
            ("Stable", Channel::Stable),
            ("stable", Channel::Stable),
            ("PREVIEW", Channel::Preview),
            ("pReViEw", Channel::Preview),
        ] {
            assert_eq!(args(input, "true").validate().unwrap().channel, expected);
        }
    }

    #[test]
    fn test_invalid_channel() {
        assert_eq!(
            args("Beta", "true").validate(),
            Err(UsageError::InvalidChannel("Beta".into()))
        );
    }

    #[test]
    fn test_flag_parsing() {
        assert!(args("Stable", "TRUE").validate().unwrap().wsx_only);
        assert!(!args("Stable", " false ").validate().unwrap().wsx_only);
        assert_eq!(
            args("Stable", "yes").validate(),
            Err(UsageError::InvalidFlag("yes".into()))
        );
        assert_eq!(
            args("Stable", "1").validate(),
            Err(UsageError::InvalidFlag("1".into()))
        );
    }

    #[test]
    fn test_channel_checked_before_flag() {
        assert_eq!(
            args("Nightly", "maybe").validate().unwrap_err().exit_code(),
            -2
        );
    }

    #[test]
    fn test_hyphen_leading_values_reach_validation() {
        assert_eq!(
            args("Stable", "-1").validate(),
            Err(UsageError::InvalidFlag("-1".into()))
        );
        assert_eq!(
            args("-x", "true").validate(),
            Err(UsageError::InvalidChannel("-x".into()))
        );
        assert_eq!(
            args("--help", "--version").validate().unwrap_err().exit_code(),
            -2
        );
    }

    #[test]
    fn test_help_and_version_are_not_flags() {
        assert!(Args::try_parse_from(["collapse_setup", "--help"]).is_err());
        let parsed = Args::try_parse_from(["collapse_setup", "-V", "Stable", "true"]).unwrap();
        assert_eq!(parsed.publish_dir, PathBuf::from("-V"));
    }

    #[test]
    fn test_wrong_argument_count_is_a_parse_error() {
        assert!(Args::try_parse_from(["collapse_setup", "publish", "Stable"]).is_err());
        assert!(
            Args::try_parse_from(["collapse_setup", "publish", "Stable", "true", "extra"])
                .is_err()
        );
    }
}
