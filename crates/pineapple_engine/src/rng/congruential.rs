//! Linear congruential pair generator.
//!
//! This module provides [`CongruentialPairGenerator`], the `"simple"`
//! generator: a textbook LCG with a small prime modulus, cheap and fully
//! reproducible from its zero state.

use super::PairGenerator;

/// LCG multiplier.
pub const MULTIPLIER: u32 = 74;

/// LCG increment.
pub const INCREMENT: u32 = 75;

/// LCG modulus (prime).
pub const MODULUS: u32 = 127;

/// Normalisation divisor applied to each state value.
pub const DIVISOR: f64 = 126.0;

/// Linear congruential pair generator.
///
/// Each pair consumes two consecutive states of the recurrence
/// `state = (74 * state + 75) mod 127`, each divided by 126.
///
/// # Quality
///
/// Starting from zero the state orbit has period 63, so the generator
/// repeats every 63 pairs. It is suitable for illustration only.
///
/// # Range
///
/// The state 126 lies outside the orbit of 0, so every output is strictly
/// below 1.
///
/// # Examples
///
/// ```rust
/// use pineapple_engine::rng::{CongruentialPairGenerator, PairGenerator};
///
/// let mut rng = CongruentialPairGenerator::new();
/// assert_eq!(rng.next_pair(), (75.0 / 126.0, 37.0 / 126.0));
/// assert_eq!(rng.state(), 37);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CongruentialPairGenerator {
    /// Current LCG state, always in `0..MODULUS`.
    state: u32,
}

impl CongruentialPairGenerator {
    /// Creates a generator in its initial (zero) state.
    #[inline]
    pub fn new() -> Self {
        Self { state: 0 }
    }

    /// Returns the current LCG state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the recurrence once and returns the normalised value.
    #[inline]
    fn step(&mut self) -> f64 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        f64::from(self.state) / DIVISOR
    }
}

impl PairGenerator for CongruentialPairGenerator {
    #[inline]
    fn next_pair(&mut self) -> (f64, f64) {
        let x = self.step();
        let y = self.step();
        (x, y)
    }
}
