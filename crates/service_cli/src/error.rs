//! CLI error types.
//!
//! Every failure is a configuration problem detected before the estimation
//! loop starts, and ends the process with status 1.

use pineapple_engine::mc::ConfigError;
use pineapple_engine::rng::RngError;
use thiserror::Error;

/// Errors reported by the `pineapple` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing failed, or help/version was requested.
    #[error("{0}")]
    Args(#[from] clap::Error),

    /// `-n` was not given.
    #[error("no number of iterations given; must be >0")]
    MissingIterations,

    /// `-n` was given but is not a non-negative integer.
    #[error("invalid number of iterations '{0}'; must be >0")]
    InvalidIterations(String),

    /// The engine rejected the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `-r` named no known generator.
    #[error(transparent)]
    UnknownRng(#[from] RngError),

    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// Help and version requests travel as [`CliError::Args`] but exit 0.
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Args(err) if !err.use_stderr() => 0,
            _ => 1,
        }
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
