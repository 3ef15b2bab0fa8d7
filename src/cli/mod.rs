//! Command line interface.
//!
//! Parses and validates the three positional arguments, runs the pipeline
//! and maps the outcome to a process exit code.

mod args;
mod output;

pub use args::{Args, Invocation, USAGE};
pub use output::OutputManager;

use crate::{
    bundler::{BundledArtifact, Bundler, Emitted, SettingsBuilder},
    error::{Result, SetupError, UsageError},
};
use clap::Parser;
use std::{ffi::OsString, path::Path};

/// Main CLI entry point: process arguments, current directory as working directory.
pub async fn run() -> i32 {
    run_with(std::env::args_os(), Path::new(".")).await
}

/// Run with explicit arguments (program name first) and working directory.
///
/// Returns `0` on success, `-1/-2/-3` for usage errors and `i32::MIN` for
/// any packaging failure. Failures are printed to standard output.
pub async fn run_with<I, T>(argv: I, working_directory: &Path) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let output = OutputManager::new(log::log_enabled!(log::Level::Debug));

    // program name plus exactly three values, before anything else is looked at
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() != 4 {
        return report(&output, &SetupError::from(UsageError::ArgumentCount));
    }

    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            log::debug!("argument parsing failed: {e}");
            return report(&output, &SetupError::from(UsageError::ArgumentCount));
        }
    };

    match execute(&args, working_directory, &output).await {
        Ok(artifact) => {
            let _ = match &artifact.emitted {
                Emitted::Script(script) => {
                    output.success(&format!("Wrote {}", script.display()))
                }
                Emitted::Installer { script, msi } => {
                    let _ = output.success(&format!("Wrote {}", script.display()));
                    output.success(&format!("Built {}", msi.display()))
                }
            };
            let _ = output.indent(&format!("sha256 {}", artifact.checksum));
            0
        }
        Err(e) => report(&output, &e),
    }
}

async fn execute(
    args: &Args,
    working_directory: &Path,
    output: &OutputManager,
) -> Result<BundledArtifact> {
    let invocation = args.validate()?;

    let settings = SettingsBuilder::new()
        .source_directory(&invocation.source_directory)
        .channel(invocation.channel)
        .wsx_only(invocation.wsx_only)
        .working_directory(working_directory)
        .build()
        .map_err(SetupError::Settings)?;

    let _ = output.progress(&format!(
        "Packaging {} from {}",
        invocation.channel,
        invocation.source_directory.display()
    ));
    let _ = output.verbose(&format!(
        "Working directory {}",
        settings.working_directory().display()
    ));

    Ok(Bundler::new(settings).bundle().await?)
}

/// Print a failure and return its exit code.
fn report(output: &OutputManager, error: &SetupError) -> i32 {
    match error {
        SetupError::Usage(usage) => {
            let _ = output.failure(&usage.to_string());
            let _ = output.println(&format!("Usage: {USAGE}"));
        }
        _ => {
            let mut chain = error.chain().into_iter();
            if let Some(head) = chain.next() {
                let _ = output.failure(&head);
            }
            for cause in chain {
                let _ = output.indent(&format!("caused by: {cause}"));
            }
        }
    }
    error.exit_code()
}
