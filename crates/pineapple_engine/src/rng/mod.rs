//! # Pair Generation Infrastructure
//!
//! This module provides the pseudo-random pair generators that drive the
//! Monte Carlo estimator. Every generator yields two `f64` values in [0, 1)
//! per call and advances its own internal state.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Generators start from a fixed state; there is no seeding
//! - **Static dispatch**: [`AnyPairGenerator`] is a tagged enum, not a `Box<dyn Trait>`
//! - **Explicit failure**: Unknown names yield [`RngError::UnknownGenerator`], never a null
//!
//! ## Module Structure
//!
//! - `congruential`: Small-modulus linear congruential pair generator (`"simple"`)
//! - `hash`: MD5 digest-chaining pair generator (`"md5"`, behind the `md5` feature)
//! - `factory`: Name lookup and the tagged generator enum
//!
//! ## Usage Example
//!
//! ```rust
//! use pineapple_engine::rng::{self, PairGenerator, RngKind};
//!
//! let mut generator = rng::get("simple").unwrap();
//! assert_eq!(generator.kind(), RngKind::Simple);
//!
//! let (x, y) = generator.next_pair();
//! assert!((0.0..1.0).contains(&x));
//! assert!((0.0..1.0).contains(&y));
//!
//! assert!(rng::get("mersenne").is_err());
//! ```

mod congruential;
mod error;
mod factory;
#[cfg(feature = "md5")]
mod hash;

// Public re-exports
pub use congruential::CongruentialPairGenerator;
pub use error::RngError;
pub use factory::{get, AnyPairGenerator, RngKind};
#[cfg(feature = "md5")]
pub use hash::HashPairGenerator;

/// A stateful source of sample pairs.
///
/// Each call to [`next_pair`](PairGenerator::next_pair) advances the internal
/// state and returns two values in the half-open interval [0, 1). Output is
/// fully determined by the initial state; implementations must not draw on
/// external entropy.
pub trait PairGenerator {
    /// Advances the generator and returns the next `(x, y)` pair.
    fn next_pair(&mut self) -> (f64, f64);
}

impl<G: PairGenerator + ?Sized> PairGenerator for &mut G {
    #[inline]
    fn next_pair(&mut self) -> (f64, f64) {
        (**self).next_pair()
    }
}

impl<G: PairGenerator + ?Sized> PairGenerator for Box<G> {
    #[inline]
    fn next_pair(&mut self) -> (f64, f64) {
        (**self).next_pair()
    }
}
