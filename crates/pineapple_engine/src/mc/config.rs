//! Estimator configuration.
//!
//! This module provides the validated configuration for a π estimation run
//! and its builder.

use std::num::NonZeroU64;

use super::error::ConfigError;
use crate::rng::RngKind;

/// Configuration for a single estimation run.
///
/// Immutable once built; use [`EstimatorConfig::builder`] to construct.
///
/// # Examples
///
/// ```rust
/// use pineapple_engine::mc::EstimatorConfig;
/// use pineapple_engine::rng::RngKind;
///
/// let config = EstimatorConfig::builder()
///     .iterations(1_000)
///     .generator(RngKind::Simple)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations().get(), 1_000);
/// assert_eq!(config.generator(), RngKind::Simple);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Number of pairs to draw.
    iterations: NonZeroU64,
    /// Generator used to draw them.
    generator: RngKind,
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the number of pairs drawn per run.
    #[inline]
    pub fn iterations(&self) -> NonZeroU64 {
        self.iterations
    }

    /// Returns the generator kind.
    #[inline]
    pub fn generator(&self) -> RngKind {
        self.generator
    }
}

/// Builder for [`EstimatorConfig`].
///
/// The generator defaults to [`RngKind::Simple`]; the iteration count has no
/// default and must be positive.
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    iterations: Option<u64>,
    generator: RngKind,
}

impl EstimatorConfigBuilder {
    /// Sets the number of pairs to draw.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Pair count, must be at least 1
    #[inline]
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the generator kind.
    #[inline]
    pub fn generator(mut self, generator: RngKind) -> Self {
        self.generator = generator;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `iterations` was never set
    /// - `iterations` is 0
    pub fn build(self) -> Result<EstimatorConfig, ConfigError> {
        let iterations = self.iterations.ok_or(ConfigError::MissingParameter("iterations"))?;
        let iterations =
            NonZeroU64::new(iterations).ok_or(ConfigError::InvalidIterationCount(iterations))?;

        Ok(EstimatorConfig {
            iterations,
            generator: self.generator,
        })
    }
}
