//! Monte Carlo estimation of π.
//!
//! Pairs are drawn uniformly from the unit square; the fraction landing in
//! the quarter-circle `x² + y² ≤ 1` approximates π/4.
//!
//! # Architecture
//!
//! ```text
//! PiEstimator
//! ├── EstimatorConfig   (iteration count, generator kind)
//! ├── AnyPairGenerator  (pair source, owned for the run)
//! └── estimate_pi()     (hit counting loop)
//!     └── PiEstimate    (iterations, hits, value)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pineapple_engine::mc::{EstimatorConfig, PiEstimator};
//! use pineapple_engine::rng::RngKind;
//!
//! let config = EstimatorConfig::builder()
//!     .iterations(10_000)
//!     .generator(RngKind::Simple)
//!     .build()
//!     .unwrap();
//!
//! let estimate = PiEstimator::new(&config).run();
//! assert!(estimate.value > 3.0 && estimate.value < 3.3);
//! ```

mod config;
mod error;
mod estimator;

pub use config::{EstimatorConfig, EstimatorConfigBuilder};
pub use error::ConfigError;
pub use estimator::{estimate_pi, is_hit, PiEstimate, PiEstimator};
