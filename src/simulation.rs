//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random sites on a fresh lattice until it
//! percolates; the open fraction at that moment is one threshold sample.
//! Samples from repeated independent trials are aggregated into a mean,
//! population standard deviation, and 95% confidence interval.
//!
//! Draws use rejection sampling: a draw landing on an already-open site is
//! discarded and redrawn, so every accepted draw opens a distinct site and
//! the terminal open count is exact. Expected draws to fill the lattice
//! are O(N² log N); termination is guaranteed with probability 1 because
//! every closed site keeps a positive selection probability.
//!
//! Trials share no mutable state, so with the `parallel` feature they run
//! on rayon's worker pool and the per-trial results are collected
//! map-then-reduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::PercolationError;
use crate::grid::Percolation;

/// z* for a two-sided 95% normal confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Run one trial on a fresh `n`×`n` lattice.
///
/// Opens uniformly random sites until the lattice percolates and returns
/// the fraction of sites open at that moment.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64, PercolationError> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }
    Ok(grid.open_sites() as f64 / (n * n) as f64)
}

/// Threshold samples from `trials` independent experiments on an `n`×`n`
/// lattice, plus their aggregate statistics.
///
/// All trials run eagerly inside [`PercolationStats::run`]; the accessors
/// afterwards are pure reads over the recorded sample sequence.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` independent trials on an `n`×`n` lattice.
    ///
    /// Requires `n >= 1` and `trials >= 1`. Each trial draws from its own
    /// thread-local RNG; with the `parallel` feature trials run
    /// concurrently.
    pub fn run(n: usize, trials: usize) -> Result<Self, PercolationError> {
        Self::validate(n, trials)?;
        let thresholds = Self::collect_thresholds(n, trials)?;
        Ok(Self { n, thresholds })
    }

    /// Deterministic variant of [`run`](Self::run) driven by a single
    /// seeded RNG. Always serial so the draw sequence is reproducible.
    pub fn run_seeded(n: usize, trials: usize, seed: u64) -> Result<Self, PercolationError> {
        Self::validate(n, trials)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let thresholds = (0..trials)
            .map(|_| run_trial(n, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { n, thresholds })
    }

    fn validate(n: usize, trials: usize) -> Result<(), PercolationError> {
        if n < 1 {
            return Err(PercolationError::GridTooSmall(n));
        }
        if trials < 1 {
            return Err(PercolationError::TooFewTrials(trials));
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn collect_thresholds(n: usize, trials: usize) -> Result<Vec<f64>, PercolationError> {
        (0..trials)
            .into_par_iter()
            .map_init(rand::thread_rng, |rng, _| run_trial(n, rng))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_thresholds(n: usize, trials: usize) -> Result<Vec<f64>, PercolationError> {
        let mut rng = rand::thread_rng();
        (0..trials).map(|_| run_trial(n, &mut rng)).collect()
    }

    /// Lattice side length the trials ran on.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of recorded trials.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// The recorded threshold sequence, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the recorded thresholds. Zero for an empty sample
    /// sequence, which is unreachable through [`run`](Self::run).
    pub fn mean(&self) -> f64 {
        if self.thresholds.is_empty() {
            return 0.0;
        }
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Population standard deviation of the recorded thresholds (divides
    /// by the trial count, not `trials - 1`).
    ///
    /// On a 1×1 lattice every trial yields exactly 1.0, so no variance
    /// estimate is meaningful; that degenerate case reports NaN rather
    /// than zero.
    pub fn stddev(&self) -> f64 {
        if self.n == 1 {
            return f64::NAN;
        }
        if self.thresholds.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .thresholds
            .iter()
            .map(|t| {
                let d = t - mean;
                d * d
            })
            .sum::<f64>()
            / self.thresholds.len() as f64;
        variance.sqrt()
    }

    /// Low endpoint of the 95% confidence interval for the mean. NaN when
    /// [`stddev`](Self::stddev) is undefined.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval for the mean. NaN when
    /// [`stddev`](Self::stddev) is undefined.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}
