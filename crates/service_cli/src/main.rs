//! Pineapple CLI - Monte Carlo estimation of π
//!
//! This is the command-line entry point for the pineapple estimator.
//!
//! # Usage
//!
//! ```text
//! pineapple [-h] [-r {rng}] -n {iterations}
//! ```
//!
//! - `-r` selects the pair generator (`simple`, or `md5` when compiled in)
//! - `-n` sets the number of pairs to draw and is required
//!
//! # Exit Codes
//!
//! `0` on success or `-h`; `1` on a missing or invalid iteration count, an
//! unknown generator or an unrecognised flag.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses and validates
//! input, then hands a validated configuration to `pineapple_engine`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::RunConfig;

/// Monte Carlo estimator of pi
#[derive(Parser, Debug)]
#[command(name = "pineapple")]
#[command(version, about, long_about = None)]
#[command(override_usage = "pineapple [-h] [-r {rng}] -n {iterations}")]
pub struct Cli {
    /// Pair generator to sample with
    #[arg(short = 'r', long = "rng", value_name = "RNG", default_value = config::DEFAULT_RNG)]
    pub rng: String,

    /// Number of pairs to draw (must be > 0)
    #[arg(
        short = 'n',
        long = "iterations",
        value_name = "ITERATIONS",
        allow_hyphen_values = true
    )]
    pub iterations: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::from_args(cli)?;
    debug!(?config, "Run configuration loaded");

    let stdout = io::stdout();
    commands::estimate::run(&config, &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help, version and usage errors are rendered by clap itself
            let err = CliError::from(err);
            if let CliError::Args(inner) = &err {
                let _ = inner.print();
            }
            return ExitCode::from(err.exit_status());
        }
    };

    init_tracing(config::log_level(cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "Estimation aborted");
            eprintln!("pineapple: {err}");
            ExitCode::from(err.exit_status())
        }
    }
}
