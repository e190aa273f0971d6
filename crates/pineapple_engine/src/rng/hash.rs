//! MD5 digest-chaining pair generator.
//!
//! [`HashPairGenerator`] feeds its 16-byte buffer through MD5 on every call
//! and reads the new digest as two little-endian `u64` halves. The hash is
//! used purely as a mixing function; nothing here is meant to be secure.

use md5::{Digest, Md5};

use super::PairGenerator;

/// Width of the MD5 digest, and therefore of the generator state, in bytes.
pub const DIGEST_LEN: usize = 16;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Digest-chaining pair generator.
///
/// State is a single digest-width buffer, initially all zeros. Each call
/// replaces it with `MD5(buffer)`; bytes `0..8` and `8..16` are decoded
/// little-endian and divided by `u64::MAX`.
///
/// # Byte Order
///
/// The halves are always decoded little-endian so that the sequence is the
/// same on every platform.
///
/// # Examples
///
/// ```rust
/// use pineapple_engine::rng::{HashPairGenerator, PairGenerator};
///
/// let mut rng = HashPairGenerator::new();
/// let (x, y) = rng.next_pair();
/// assert!((0.0..1.0).contains(&x) && (0.0..1.0).contains(&y));
///
/// // MD5 of sixteen zero bytes
/// assert_eq!(rng.digest()[..4], [0x4a, 0xe7, 0x13, 0x36]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashPairGenerator {
    buffer: [u8; DIGEST_LEN],
}

impl HashPairGenerator {
    /// Creates a generator with an all-zero buffer.
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: [0; DIGEST_LEN],
        }
    }

    /// Returns the current digest buffer.
    #[inline]
    pub fn digest(&self) -> &[u8; DIGEST_LEN] {
        &self.buffer
    }
}

impl PairGenerator for HashPairGenerator {
    fn next_pair(&mut self) -> (f64, f64) {
        let digest = Md5::digest(self.buffer);
        self.buffer.copy_from_slice(&digest);

        let (lo, hi) = self.buffer.split_at(DIGEST_LEN / 2);
        let a = u64::from_le_bytes(half(lo));
        let b = u64::from_le_bytes(half(hi));

        (normalise(a), normalise(b))
    }
}

#[inline]
fn half(bytes: &[u8]) -> [u8; DIGEST_LEN / 2] {
    let mut out = [0u8; DIGEST_LEN / 2];
    out.copy_from_slice(bytes);
    out
}

/// Maps a `u64` onto [0, 1) by dividing by `u64::MAX`.
///
/// `u64::MAX as f64` rounds up to 2^64, and so do the `u64` values just
/// below it, which would come out as exactly 1.0. Those are clamped to the
/// largest `f64` below one.
#[inline]
pub(crate) fn normalise(value: u64) -> f64 {
    (value as f64 / u64::MAX as f64).min(BELOW_ONE)
}
