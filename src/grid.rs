//! N×N site lattice with incremental top-to-bottom connectivity.
//!
//! Sites are addressed by 1-indexed `(row, col)` with row 1 at the top.
//! Each open site is unioned with its already-open orthogonal neighbors,
//! plus a virtual `TOP` node for row 1 and a virtual `BOTTOM` node for
//! row N, so `percolates` is a single connectivity query instead of an
//! O(N) boundary scan.
//!
//! Wiring `BOTTOM` into the same structure used for the "full site" query
//! causes **backwash**: once the lattice percolates, any open site touching
//! the bottom row shares a set with `TOP` through `BOTTOM`, even with no
//! open path of its own to the top. The model therefore keeps two
//! structures over the same site mapping: one with both virtual nodes for
//! `percolates`, and one without `BOTTOM` that answers `is_full` exactly.

use quick_union::QuickUnion;

use crate::error::PercolationError;

/// Grid connectivity model for site percolation.
///
/// Tracks which sites are open and answers `is_full` / `percolates`
/// incrementally as sites open. Sites never close, so both answers are
/// monotone in the sequence of `open` calls.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    /// Sites + TOP + BOTTOM. Answers `percolates`.
    both: QuickUnion,
    /// Sites + TOP only. Answers `is_full` without backwash.
    top_only: QuickUnion,
}

impl Percolation {
    /// Create an `n`×`n` lattice with every site blocked.
    ///
    /// `n` must be at least 1.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n < 1 {
            return Err(PercolationError::GridTooSmall(n));
        }
        let sites = n * n;
        Ok(Self {
            n,
            open: vec![false; sites],
            open_count: 0,
            both: QuickUnion::new(sites + 2),
            top_only: QuickUnion::new(sites + 1),
        })
    }

    /// Lattice side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of currently open sites.
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    /// Slot of the virtual top node, one past the last site.
    fn top_node(&self) -> usize {
        self.n * self.n
    }

    /// Slot of the virtual bottom node. Exists only in `both`.
    fn bottom_node(&self) -> usize {
        self.n * self.n + 1
    }

    /// Bijection from 1-indexed `(row, col)` onto `0..n*n`.
    fn site_index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), PercolationError> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::OutOfBounds { row, col, n: self.n });
        }
        Ok(())
    }

    /// Open the site at `(row, col)`.
    ///
    /// Already-open sites are left untouched, so repeated calls are
    /// idempotent. Opening links the site to each open orthogonal
    /// neighbor, to `TOP` when it sits in row 1, and to `BOTTOM` (in the
    /// percolation structure only) when it sits in row N.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        self.check_bounds(row, col)?;
        let idx = self.site_index(row, col);
        if self.open[idx] {
            return Ok(());
        }
        self.open[idx] = true;
        self.open_count += 1;

        if row > 1 {
            self.link_if_open(idx, row - 1, col);
        }
        if row < self.n {
            self.link_if_open(idx, row + 1, col);
        }
        if col > 1 {
            self.link_if_open(idx, row, col - 1);
        }
        if col < self.n {
            self.link_if_open(idx, row, col + 1);
        }

        if row == 1 {
            let top = self.top_node();
            self.both.union(idx, top);
            self.top_only.union(idx, top);
        }
        if row == self.n {
            let bottom = self.bottom_node();
            self.both.union(idx, bottom);
        }
        Ok(())
    }

    /// Union `idx` with the site at `(row, col)` in both structures, if
    /// that site is open. Caller guarantees `(row, col)` is in bounds.
    fn link_if_open(&mut self, idx: usize, row: usize, col: usize) {
        let other = self.site_index(row, col);
        if self.open[other] {
            self.both.union(idx, other);
            self.top_only.union(idx, other);
        }
    }

    /// Is the site at `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.check_bounds(row, col)?;
        Ok(self.open[self.site_index(row, col)])
    }

    /// Is the site at `(row, col)` full, i.e. open and connected to the
    /// top row through a chain of open sites?
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.check_bounds(row, col)?;
        let idx = self.site_index(row, col);
        Ok(self.open[idx] && self.top_only.connected(idx, self.top_node()))
    }

    /// Does an open path connect the top row to the bottom row?
    pub fn percolates(&self) -> bool {
        self.both.connected(self.top_node(), self.bottom_node())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Brute-force reference for `is_full`: flood fill over open sites
    /// starting from the open sites of row 1.
    fn flood_full(grid: &Percolation) -> Vec<bool> {
        let n = grid.size();
        let mut full = vec![false; n * n];
        let mut stack = Vec::new();
        for col in 1..=n {
            if grid.is_open(1, col).unwrap() {
                full[col - 1] = true;
                stack.push((1, col));
            }
        }
        while let Some((row, col)) = stack.pop() {
            let visit = |r: usize, c: usize, full: &mut Vec<bool>, stack: &mut Vec<(usize, usize)>| {
                let idx = (r - 1) * n + (c - 1);
                if grid.is_open(r, c).unwrap() && !full[idx] {
                    full[idx] = true;
                    stack.push((r, c));
                }
            };
            if row > 1 {
                visit(row - 1, col, &mut full, &mut stack);
            }
            if row < n {
                visit(row + 1, col, &mut full, &mut stack);
            }
            if col > 1 {
                visit(row, col - 1, &mut full, &mut stack);
            }
            if col < n {
                visit(row, col + 1, &mut full, &mut stack);
            }
        }
        full
    }

    fn assert_full_matches_flood(grid: &Percolation) {
        let n = grid.size();
        let reference = flood_full(grid);
        for row in 1..=n {
            for col in 1..=n {
                assert_eq!(
                    grid.is_full(row, col).unwrap(),
                    reference[(row - 1) * n + (col - 1)],
                    "is_full disagrees with flood fill at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_new_grid_all_closed() {
        let grid = Percolation::new(5).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.open_sites(), 0);
        for row in 1..=5 {
            for col in 1..=5 {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
        assert!(!grid.percolates());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            Percolation::new(0).unwrap_err(),
            PercolationError::GridTooSmall(0)
        );
    }

    #[test]
    fn test_single_site_grid() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.is_open(1, 1).unwrap());
        assert!(grid.is_full(1, 1).unwrap());
        assert!(grid.percolates());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut grid = Percolation::new(3).unwrap();
        for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (100, 100)] {
            let expected = PercolationError::OutOfBounds { row, col, n: 3 };
            assert_eq!(grid.open(row, col).unwrap_err(), expected);
            assert_eq!(grid.is_open(row, col).unwrap_err(), expected);
            assert_eq!(grid.is_full(row, col).unwrap_err(), expected);
        }
        // Rejected calls must leave the grid untouched.
        assert_eq!(grid.open_sites(), 0);
        assert!(!grid.percolates());
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        let first = grid.clone();
        grid.open(2, 2).unwrap();
        assert_eq!(grid.open_sites(), 1);
        assert_eq!(grid.open_sites(), first.open_sites());
        assert_eq!(grid.is_open(2, 2).unwrap(), first.is_open(2, 2).unwrap());
        assert_eq!(grid.percolates(), first.percolates());
    }

    #[test]
    fn test_column_percolates() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(1, 1).unwrap();
        assert!(!grid.percolates());
        grid.open(2, 1).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn test_top_row_alone_does_not_percolate() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(1, 2).unwrap();
        assert!(!grid.percolates());
        assert!(grid.is_full(1, 1).unwrap());
        assert!(grid.is_full(1, 2).unwrap());
    }

    #[test]
    fn test_percolation_is_monotonic() {
        let mut grid = Percolation::new(4).unwrap();
        for row in 1..=4 {
            grid.open(row, 2).unwrap();
        }
        assert!(grid.percolates());
        // Further opens anywhere never revoke percolation.
        for col in 1..=4 {
            grid.open(3, col).unwrap();
            assert!(grid.percolates());
        }
    }

    #[test]
    fn test_full_requires_open_path_to_top() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        assert!(!grid.is_full(2, 2).unwrap());
        grid.open(1, 2).unwrap();
        assert!(grid.is_full(2, 2).unwrap());
        assert!(grid.is_full(1, 2).unwrap());
        // An open site with no path stays non-full.
        grid.open(3, 1).unwrap();
        assert!(!grid.is_full(3, 1).unwrap());
    }

    #[test]
    fn test_no_backwash_after_percolation() {
        // Left column percolates; (3,3) touches only the bottom boundary.
        let mut grid = Percolation::new(3).unwrap();
        for row in 1..=3 {
            grid.open(row, 1).unwrap();
        }
        assert!(grid.percolates());
        grid.open(3, 3).unwrap();
        assert!(grid.is_open(3, 3).unwrap());
        assert!(
            !grid.is_full(3, 3).unwrap(),
            "bottom-row site with no path to the top must not report full"
        );
        assert_full_matches_flood(&grid);
    }

    #[test]
    fn test_full_matches_flood_fill_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [1, 2, 3, 5, 8] {
            let mut grid = Percolation::new(n).unwrap();
            // Check the invariant at several intermediate fill states, not
            // just the terminal one.
            for _ in 0..(n * n) {
                let row = rng.gen_range(1..=n);
                let col = rng.gen_range(1..=n);
                grid.open(row, col).unwrap();
                assert_full_matches_flood(&grid);
            }
        }
    }

    #[test]
    fn test_full_grid_percolates() {
        for n in [1, 2, 5] {
            let mut grid = Percolation::new(n).unwrap();
            for row in 1..=n {
                for col in 1..=n {
                    grid.open(row, col).unwrap();
                }
            }
            assert!(grid.percolates(), "fully open {}x{} grid must percolate", n, n);
            assert_eq!(grid.open_sites(), n * n);
        }
    }
}
