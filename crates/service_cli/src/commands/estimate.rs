//! Estimate command implementation
//!
//! Runs the π estimator with the configured generator and writes the
//! progress line and result.

use std::io::Write;

use pineapple_engine::mc::{PiEstimate, PiEstimator};
use tracing::info;

use crate::config::RunConfig;
use crate::Result;

/// Run the estimate command, writing the report to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<PiEstimate> {
    info!("Starting estimation...");
    info!("  Iterations: {}", config.iterations());
    info!("  Generator: {}", config.rng());

    write!(
        out,
        "Doing {} iterations with the {} rng... ",
        config.iterations(),
        config.rng()
    )?;
    out.flush()?;

    let estimate = PiEstimator::new(config.estimator()).run();

    writeln!(out, "done.")?;
    writeln!(out, "pi ~ {:.6}", estimate.value)?;

    info!("Estimation complete");
    Ok(estimate)
}
