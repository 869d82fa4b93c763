//! Command-line percolation threshold estimator.
//!
//! Runs the requested number of Monte Carlo trials on an n×n lattice and
//! prints the sample mean, population standard deviation, and 95%
//! confidence interval of the percolation threshold.

use anyhow::Result;
use clap::Parser;

use percolation_sim::simulation::PercolationStats;

/// Estimate the site percolation threshold of an n×n lattice.
#[derive(Debug, Parser)]
#[command(name = "percolation-sim", version, about)]
struct Cli {
    /// Lattice side length (at least 1).
    n: usize,
    /// Number of independent trials (at least 1).
    trials: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stats = PercolationStats::run(cli.n, cli.trials)?;
    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = {}, {}",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    Ok(())
}
