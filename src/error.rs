//! Error types for the percolation estimator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    #[error("grid side must be at least 1, got {0}")] GridTooSmall(usize),
    #[error("trial count must be at least 1, got {0}")] TooFewTrials(usize),
    #[error("site ({row}, {col}) out of bounds for {n}x{n} grid")] OutOfBounds { row: usize, col: usize, n: usize },
}
