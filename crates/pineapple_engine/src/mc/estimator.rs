//! The π estimation loop.
//!
//! [`estimate_pi`] is the loop itself; [`PiEstimator`] pairs it with an
//! owned generator and a validated [`EstimatorConfig`].

use std::f64::consts::PI;
use std::num::NonZeroU64;

use tracing::{debug, info};

use super::config::EstimatorConfig;
use crate::rng::{AnyPairGenerator, PairGenerator};

/// Result of an estimation run.
///
/// # Examples
///
/// ```rust
/// use pineapple_engine::mc::PiEstimate;
///
/// let estimate = PiEstimate::from_counts(1_000, 785);
/// assert_eq!(estimate.value, 3.14);
/// assert!(estimate.abs_error() < 0.002);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    /// Number of pairs drawn.
    pub iterations: u64,
    /// Number of pairs inside the unit quarter-circle.
    pub hits: u64,
    /// `4 * hits / iterations`.
    pub value: f64,
}

impl PiEstimate {
    /// Builds an estimate from raw counts.
    ///
    /// The value is computed as `(4.0 * hits) / iterations` in `f64`, so
    /// zero hits give exactly 0.0 and `hits == iterations` gives exactly 4.0.
    #[inline]
    pub fn from_counts(iterations: u64, hits: u64) -> Self {
        Self {
            iterations,
            hits,
            value: 4.0 * hits as f64 / iterations as f64,
        }
    }

    /// Absolute distance from π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.value - PI).abs()
    }
}

/// Returns whether `(x, y)` lies inside or on the unit circle.
#[inline]
pub fn is_hit(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Draws `iterations` pairs from `generator` and estimates π.
///
/// Points on the circle itself count as hits.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroU64;
/// use pineapple_engine::mc::estimate_pi;
/// use pineapple_engine::rng::CongruentialPairGenerator;
///
/// let mut rng = CongruentialPairGenerator::new();
/// let estimate = estimate_pi(&mut rng, NonZeroU64::new(1_000).unwrap());
///
/// assert_eq!(estimate.hits, 794);
/// assert_eq!(estimate.value, 3.176);
/// ```
pub fn estimate_pi<G: PairGenerator + ?Sized>(
    generator: &mut G,
    iterations: NonZeroU64,
) -> PiEstimate {
    let iterations = iterations.get();
    debug!(iterations, "Starting estimation loop");

    let mut hits: u64 = 0;
    for _ in 0..iterations {
        let (x, y) = generator.next_pair();
        if is_hit(x, y) {
            hits += 1;
        }
    }

    PiEstimate::from_counts(iterations, hits)
}

/// Estimator owning its generator.
///
/// Repeated calls to [`run`](PiEstimator::run) continue the generator's
/// sequence; they do not restart it.
///
/// # Examples
///
/// ```rust
/// use pineapple_engine::mc::{EstimatorConfig, PiEstimator};
///
/// let config = EstimatorConfig::builder().iterations(1_000).build().unwrap();
/// let mut estimator = PiEstimator::new(&config);
///
/// let first = estimator.run();
/// assert_eq!(first.value, 3.176);
/// ```
#[derive(Clone, Debug)]
pub struct PiEstimator<G = AnyPairGenerator> {
    generator: G,
    iterations: NonZeroU64,
}

impl PiEstimator<AnyPairGenerator> {
    /// Creates an estimator with a fresh generator of the configured kind.
    pub fn new(config: &EstimatorConfig) -> Self {
        Self {
            generator: config.generator().build(),
            iterations: config.iterations(),
        }
    }

    /// Runs once and logs the outcome.
    pub fn run(&mut self) -> PiEstimate {
        let kind = self.generator.kind();
        let estimate = estimate_pi(&mut self.generator, self.iterations);
        info!(
            rng = %kind,
            iterations = estimate.iterations,
            hits = estimate.hits,
            estimate = estimate.value,
            abs_error = estimate.abs_error(),
            "Estimation complete"
        );
        estimate
    }
}

impl<G: PairGenerator> PiEstimator<G> {
    /// Creates an estimator around an existing generator.
    pub fn with_generator(generator: G, iterations: NonZeroU64) -> Self {
        Self {
            generator,
            iterations,
        }
    }

    /// Runs once without logging the outcome.
    pub fn run_quiet(&mut self) -> PiEstimate {
        estimate_pi(&mut self.generator, self.iterations)
    }

    /// Returns the number of pairs drawn per run.
    #[inline]
    pub fn iterations(&self) -> NonZeroU64 {
        self.iterations
    }

    /// Returns the owned generator.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Consumes the estimator and returns its generator.
    #[inline]
    pub fn into_generator(self) -> G {
        self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{CongruentialPairGenerator, RngKind};
    use approx::assert_relative_eq;

    /// Generator returning the same pair forever.
    struct ConstantPair(f64, f64);

    impl PairGenerator for ConstantPair {
        fn next_pair(&mut self) -> (f64, f64) {
            (self.0, self.1)
        }
    }

    /// Generator replaying a fixed list of pairs, cycling when exhausted.
    struct Replay {
        pairs: Vec<(f64, f64)>,
        index: usize,
    }

    impl PairGenerator for Replay {
        fn next_pair(&mut self) -> (f64, f64) {
            let pair = self.pairs[self.index % self.pairs.len()];
            self.index += 1;
            pair
        }
    }

    fn n(value: u64) -> NonZeroU64 {
        NonZeroU64::new(value).unwrap()
    }

    #[test]
    fn test_origin_always_hits() {
        for iterations in [1, 2, 7, 1_000, 65_537] {
            let estimate = estimate_pi(&mut ConstantPair(0.0, 0.0), n(iterations));
            assert_eq!(estimate.hits, iterations);
            assert_eq!(estimate.value, 4.0);
        }
    }

    #[test]
    fn test_far_corner_never_hits() {
        for iterations in [1, 3, 1_000] {
            let estimate = estimate_pi(&mut ConstantPair(1.0, 1.0), n(iterations));
            assert_eq!(estimate.hits, 0);
            assert_eq!(estimate.value, 0.0);
        }
    }

    #[test]
    fn test_boundary_counts_as_hit() {
        assert!(is_hit(1.0, 0.0));
        assert!(is_hit(0.0, 1.0));
        assert!(!is_hit(1.0, 1e-4));

        let estimate = estimate_pi(&mut ConstantPair(1.0, 0.0), n(10));
        assert_eq!(estimate.value, 4.0);
    }

    #[test]
    fn test_mixed_pairs() {
        let mut rng = Replay {
            pairs: vec![(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (0.9, 0.9)],
            index: 0,
        };
        let estimate = estimate_pi(&mut rng, n(4));

        assert_eq!(estimate.hits, 2);
        assert_eq!(estimate.value, 2.0);
        assert_eq!(rng.index, 4);
    }

    /// Bit-for-bit baseline for the congruential generator.
    #[test]
    fn test_congruential_baseline() {
        let mut rng = CongruentialPairGenerator::new();
        let estimate = estimate_pi(&mut rng, n(1_000));

        assert_eq!(estimate.iterations, 1_000);
        assert_eq!(estimate.hits, 794);
        assert_eq!(estimate.value.to_bits(), 3.176_f64.to_bits());
    }

    /// Bit-for-bit baseline for the digest-chaining generator.
    #[cfg(feature = "md5")]
    #[test]
    fn test_hash_baseline() {
        let config = EstimatorConfig::builder()
            .iterations(1_000)
            .generator(RngKind::Md5)
            .build()
            .unwrap();
        let estimate = PiEstimator::new(&config).run();

        assert_eq!(estimate.hits, 791);
        assert_eq!(estimate.value.to_bits(), 3.164_f64.to_bits());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let config = EstimatorConfig::builder()
            .iterations(5_000)
            .generator(RngKind::Simple)
            .build()
            .unwrap();

        let first = PiEstimator::new(&config).run();
        let second = PiEstimator::new(&config).run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_estimator_continues_sequence() {
        let mut estimator =
            PiEstimator::with_generator(CongruentialPairGenerator::new(), n(1));
        estimator.run_quiet();
        assert_eq!(estimator.generator().state(), 37);
        estimator.run_quiet();
        assert_eq!(estimator.generator().state(), 84);
        assert_eq!(estimator.iterations().get(), 1);
        assert_eq!(estimator.into_generator().state(), 84);
    }

    #[test]
    fn test_from_counts() {
        let estimate = PiEstimate::from_counts(4, 3);
        assert_eq!(estimate.value, 3.0);
        assert_relative_eq!(estimate.abs_error(), PI - 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_long_run_converges_roughly() {
        let config = EstimatorConfig::builder().iterations(63_000).build().unwrap();
        let estimate = PiEstimator::new(&config).run();

        // 63 pairs per period, so a whole number of periods gives the
        // same ratio as a single period.
        let period = estimate_pi(&mut CongruentialPairGenerator::new(), n(63));
        assert_eq!(estimate.hits, period.hits * 1_000);
        assert!(estimate.abs_error() < 0.2);
    }
}
