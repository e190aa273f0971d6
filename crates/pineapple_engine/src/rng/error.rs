//! Error types for generator lookup.

use thiserror::Error;

/// Error raised when a generator cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RngError {
    /// The requested name matches no compiled-in generator.
    #[error("unknown rng '{name}' (available: {})", .available.join(", "))]
    UnknownGenerator {
        /// Name as given by the caller.
        name: String,
        /// Names of the generators compiled into this build.
        available: Vec<&'static str>,
    },
}
