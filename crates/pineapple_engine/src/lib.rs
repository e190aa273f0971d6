//! # Pineapple Engine
//!
//! Monte Carlo estimation of π over pluggable pseudo-random pair generators.
//!
//! ## Layout
//!
//! - [`rng`]: the [`PairGenerator`](rng::PairGenerator) trait, the
//!   congruential and MD5 digest-chaining generators, and lookup by name
//! - [`mc`]: estimator configuration and the hit-counting loop
//!
//! ## Usage Example
//!
//! ```rust
//! use std::num::NonZeroU64;
//! use pineapple_engine::{estimate_pi, rng};
//!
//! let mut generator = rng::get("simple").unwrap();
//! let estimate = estimate_pi(&mut generator, NonZeroU64::new(1_000).unwrap());
//!
//! println!("pi ~ {:.6}", estimate.value);
//! ```
//!
//! ## Features
//!
//! - `md5` (default): compiles the `"md5"` digest-chaining generator. Without
//!   it only `"simple"` is available.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

// Pair generators and lookup by name
pub mod rng;

// Estimation loop
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{estimate_pi, EstimatorConfig, PiEstimate, PiEstimator};
pub use rng::{AnyPairGenerator, PairGenerator, RngError, RngKind};

/// Crate version, as recorded in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
