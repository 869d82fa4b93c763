//! # percolation-sim
//!
//! Monte Carlo estimator for the site percolation threshold of an N×N
//! square lattice.
//!
//! Sites start blocked and are opened one at a time. The lattice
//! **percolates** when a chain of open sites connects the top row to the
//! bottom row. Opening sites uniformly at random until that happens and
//! recording the open fraction gives one sample of the percolation
//! threshold; averaging many independent trials estimates it
//! (≈0.5927 for this site model as N → ∞).
//!
//! ## Structure
//!
//! - [`grid`]: incremental connectivity model over the lattice, backed by
//!   two weighted quick-union instances (one per boundary wiring, which is
//!   what keeps the "full site" query free of backwash).
//! - [`simulation`]: trial runner and threshold statistics (mean,
//!   population standard deviation, 95% confidence interval).
//! - [`error`]: argument and bounds errors.
//!
//! Trials are independent, so with the default `parallel` feature they run
//! on a rayon worker pool.

pub mod error;
pub mod grid;
pub mod simulation;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::grid::*;
    pub use crate::simulation::*;
}
