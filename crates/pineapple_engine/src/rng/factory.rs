//! Generator lookup by name.
//!
//! [`RngKind`] names the generators compiled into this build and
//! [`AnyPairGenerator`] holds a constructed one. [`get`] ties the two
//! together for callers that start from a user-supplied string.

use std::fmt;
use std::str::FromStr;

use super::congruential::CongruentialPairGenerator;
use super::error::RngError;
#[cfg(feature = "md5")]
use super::hash::HashPairGenerator;
use super::PairGenerator;

/// Identifier of a pair generator implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RngKind {
    /// Linear congruential generator, selected with `"simple"`.
    #[default]
    Simple,
    /// MD5 digest-chaining generator, selected with `"md5"`.
    #[cfg(feature = "md5")]
    Md5,
}

impl RngKind {
    /// Every kind compiled into this build, in lookup order.
    pub const ALL: &'static [RngKind] = &[
        RngKind::Simple,
        #[cfg(feature = "md5")]
        RngKind::Md5,
    ];

    /// Returns the command-line name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            RngKind::Simple => "simple",
            #[cfg(feature = "md5")]
            RngKind::Md5 => "md5",
        }
    }

    /// Returns the names of every kind compiled into this build.
    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(RngKind::name).collect()
    }

    /// Constructs a fresh generator of this kind in its initial state.
    pub fn build(&self) -> AnyPairGenerator {
        match self {
            RngKind::Simple => AnyPairGenerator::Congruential(CongruentialPairGenerator::new()),
            #[cfg(feature = "md5")]
            RngKind::Md5 => AnyPairGenerator::Hash(HashPairGenerator::new()),
        }
    }
}

impl FromStr for RngKind {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RngError::UnknownGenerator {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

impl fmt::Display for RngKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constructed generator of any compiled-in kind.
///
/// Dispatch is a `match`, so the estimator loop stays monomorphic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyPairGenerator {
    /// See [`CongruentialPairGenerator`].
    Congruential(CongruentialPairGenerator),
    /// See [`HashPairGenerator`].
    #[cfg(feature = "md5")]
    Hash(HashPairGenerator),
}

impl AnyPairGenerator {
    /// Returns the kind of the wrapped generator.
    pub fn kind(&self) -> RngKind {
        match self {
            AnyPairGenerator::Congruential(_) => RngKind::Simple,
            #[cfg(feature = "md5")]
            AnyPairGenerator::Hash(_) => RngKind::Md5,
        }
    }
}

impl PairGenerator for AnyPairGenerator {
    #[inline]
    fn next_pair(&mut self) -> (f64, f64) {
        match self {
            AnyPairGenerator::Congruential(rng) => rng.next_pair(),
            #[cfg(feature = "md5")]
            AnyPairGenerator::Hash(rng) => rng.next_pair(),
        }
    }
}

/// Looks up a generator by name and constructs it.
///
/// Names are matched exactly: `"simple"`, and `"md5"` when the `md5`
/// feature is enabled.
///
/// # Errors
///
/// Returns [`RngError::UnknownGenerator`] for any other name.
///
/// # Examples
///
/// ```rust
/// use pineapple_engine::rng::{self, RngError, RngKind};
///
/// assert_eq!(rng::get("simple").unwrap().kind(), RngKind::Simple);
///
/// match rng::get("SIMPLE") {
///     Err(RngError::UnknownGenerator { name, .. }) => assert_eq!(name, "SIMPLE"),
///     Ok(_) => unreachable!(),
/// }
/// ```
pub fn get(name: &str) -> Result<AnyPairGenerator, RngError> {
    let kind: RngKind = name.parse()?;
    Ok(kind.build())
}
