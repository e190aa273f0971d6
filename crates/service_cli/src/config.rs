//! Run configuration
//!
//! Turns parsed command line arguments into a validated [`RunConfig`].
//! Validation order: iteration count first, then generator name.

use pineapple_engine::mc::EstimatorConfig;
use pineapple_engine::rng::RngKind;

use crate::{Cli, CliError, Result};

/// Generator used when `-r` is not given.
pub const DEFAULT_RNG: &str = "simple";

/// Log filter used when neither `-v` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log filter used with `-v`.
pub const VERBOSE_LOG_LEVEL: &str = "info";

/// Validated configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Engine configuration
    estimator: EstimatorConfig,
}

impl RunConfig {
    /// Build from parsed arguments
    pub fn from_args(cli: &Cli) -> Result<Self> {
        let iterations = parse_iterations(cli.iterations.as_deref())?;
        let generator: RngKind = cli.rng.parse()?;

        let estimator = EstimatorConfig::builder()
            .iterations(iterations)
            .generator(generator)
            .build()?;

        Ok(Self { estimator })
    }

    /// Engine configuration
    pub fn estimator(&self) -> &EstimatorConfig {
        &self.estimator
    }

    /// Number of pairs to draw
    pub fn iterations(&self) -> u64 {
        self.estimator.iterations().get()
    }

    /// Selected generator
    pub fn rng(&self) -> RngKind {
        self.estimator.generator()
    }
}

/// Log filter for the given verbosity.
pub fn log_level(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Parse the raw `-n` value.
///
/// Zero passes here and is rejected by the engine's config builder.
fn parse_iterations(raw: Option<&str>) -> Result<u64> {
    let raw = raw.ok_or(CliError::MissingIterations)?;
    raw.trim()
        .parse()
        .map_err(|_| CliError::InvalidIterations(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pineapple_engine::mc::ConfigError;
    use pineapple_engine::rng::RngError;

    fn parse(args: &[&str]) -> Result<RunConfig> {
        let cli = Cli::try_parse_from(std::iter::once("pineapple").chain(args.iter().copied()))?;
        RunConfig::from_args(&cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-n", "1000"]).unwrap();
        assert_eq!(config.iterations(), 1000);
        assert_eq!(config.rng(), RngKind::Simple);
        assert_eq!(config.rng().name(), DEFAULT_RNG);
    }

    #[cfg(feature = "md5")]
    #[test]
    fn test_md5_selection() {
        let config = parse(&["-r", "md5", "-n", "5"]).unwrap();
        assert_eq!(config.rng(), RngKind::Md5);
        assert_eq!(config.estimator().iterations().get(), 5);
    }

    #[test]
    fn test_long_flags() {
        let config = parse(&["--rng", "simple", "--iterations", "42"]).unwrap();
        assert_eq!(config.iterations(), 42);
    }

    #[test]
    fn test_missing_iterations() {
        assert!(matches!(parse(&[]), Err(CliError::MissingIterations)));
        assert!(matches!(
            parse(&["-r", "simple"]),
            Err(CliError::MissingIterations)
        ));
    }

    #[test]
    fn test_zero_iterations() {
        assert!(matches!(
            parse(&["-n", "0"]),
            Err(CliError::Config(ConfigError::InvalidIterationCount(0)))
        ));
    }

    #[test]
    fn test_invalid_iterations() {
        for raw in ["abc", "-5", "1.5", ""] {
            match parse(&["-n", raw]) {
                Err(CliError::InvalidIterations(value)) => assert_eq!(value, raw),
                other => panic!("expected InvalidIterations for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_rng() {
        match parse(&["-r", "mersenne", "-n", "10"]) {
            Err(CliError::UnknownRng(RngError::UnknownGenerator { name, .. })) => {
                assert_eq!(name, "mersenne")
            }
            other => panic!("expected UnknownRng, got {other:?}"),
        }
    }

    /// A bad count is reported even when the generator is also unknown.
    #[test]
    fn test_iterations_checked_before_rng() {
        assert!(matches!(
            parse(&["-r", "mersenne"]),
            Err(CliError::MissingIterations)
        ));
    }

    #[test]
    fn test_unrecognised_flag() {
        match parse(&["-x", "-n", "10"]) {
            Err(err @ CliError::Args(_)) => assert_eq!(err.exit_status(), 1),
            other => panic!("expected Args error, got {other:?}"),
        }
    }

    #[test]
    fn test_help_exits_zero() {
        match parse(&["-h"]) {
            Err(err @ CliError::Args(_)) => assert_eq!(err.exit_status(), 0),
            other => panic!("expected help request, got {other:?}"),
        }
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false), "warn");
        assert_eq!(log_level(true), "info");
    }
}
