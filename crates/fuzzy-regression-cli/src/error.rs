//! Error types for the fuzzy-regression CLI

use fuzzy_regression::FuzzyRegressionError;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Unreadable or invalid experiment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error outside the per-file sweep
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error that aborts the whole run
    #[error(transparent)]
    Library(#[from] FuzzyRegressionError),
}

impl CliError {
    /// Numeric process status for this error
    pub(crate) fn status(&self) -> u8 {
        match self {
            Self::Library(_) => 1,
            Self::Config(_) => 2,
            Self::Io(_) => 7,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}
