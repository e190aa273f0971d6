//! Error types for the estimator.
//!
//! Only configuration can fail; once a run starts it always completes.

use thiserror::Error;

/// Configuration error for the estimator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Iteration count outside the valid range [1, u64::MAX].
    #[error("invalid iteration count {0}: must be > 0")]
    InvalidIterationCount(u64),
    /// A required parameter was never set.
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),
}
