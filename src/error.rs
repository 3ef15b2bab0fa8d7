//! Top-level error types and exit-code mapping.
//!
//! Every failure of a run ends up here exactly once: usage failures from
//! argument validation, or a stage failure from the pipeline.

use crate::bundler::{self, Stage, StageError};
use thiserror::Error;

/// Result type alias for a whole run.
pub type Result<T> = std::result::Result<T, SetupError>;

/// Any failure of a run.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Invalid command line.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Run configuration could not be built.
    #[error("invalid configuration: {0}")]
    Settings(#[source] bundler::Error),

    /// A pipeline stage failed.
    #[error("{stage} failed: {source}")]
    Stage {
        /// Stage that failed.
        stage: Stage,
        /// Underlying error.
        #[source]
        source: bundler::Error,
    },
}

/// Command line rejected before any work is done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Not exactly three positional arguments.
    #[error("expected 3 arguments")]
    ArgumentCount,

    /// Channel is neither Stable nor Preview.
    #[error("invalid channel: {0}")]
    InvalidChannel(String),

    /// Output-mode flag is not a boolean.
    #[error("invalid WSX-only flag: {0}")]
    InvalidFlag(String),
}

impl UsageError {
    /// Process exit code for this usage failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            UsageError::ArgumentCount => -1,
            UsageError::InvalidChannel(_) => -2,
            UsageError::InvalidFlag(_) => -3,
        }
    }
}

impl SetupError {
    /// Process exit code: `-1/-2/-3` for usage errors, `i32::MIN` otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::Usage(usage) => usage.exit_code(),
            SetupError::Settings(_) | SetupError::Stage { .. } => i32::MIN,
        }
    }

    /// The failing stage, if the pipeline was reached.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            SetupError::Usage(_) | SetupError::Settings(_) => None,
            SetupError::Stage { stage, .. } => Some(*stage),
        }
    }

    /// The error and every cause below it, outermost first.
    ///
    /// A cause whose text is already part of the previous line is skipped.
    pub fn chain(&self) -> Vec<String> {
        let mut chain = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let message = err.to_string();
            if !chain.last().is_some_and(|last| last.contains(&message)) {
                chain.push(message);
            }
            source = err.source();
        }
        chain
    }
}

impl From<StageError> for SetupError {
    fn from(err: StageError) -> Self {
        SetupError::Stage {
            stage: err.stage,
            source: err.source,
        }
    }
}
