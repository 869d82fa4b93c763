//! Weighted quick-union over a fixed universe of elements.
//!
//! Classic disjoint-set forest: union by subtree size, with path halving on
//! the mutable find. Sets only merge, never split, so connectivity queries
//! are monotone over the lifetime of the structure.
//!
//! The universe size is fixed at construction and never resizes. Element
//! indices outside the universe are a caller bug and panic rather than
//! returning an error.

/// Disjoint-set forest with union by size.
///
/// `find` walks to the root without mutating, so read-only callers can stay
/// behind `&self`. `find_mut` additionally halves the path, keeping trees
/// flat; `union` always goes through `find_mut`. Amortized cost per
/// operation is near-constant (inverse-Ackermann class).
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    /// Create a universe of `n` singleton sets, labeled `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True for an empty universe.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Root of the set containing `p`, without path compression.
    ///
    /// # Panics
    ///
    /// If `p` is outside the universe.
    pub fn find(&self, mut p: usize) -> usize {
        assert!(
            p < self.parent.len(),
            "element {} out of range for universe of {}",
            p,
            self.parent.len()
        );
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    /// Root of the set containing `p`, halving the path on the way up.
    ///
    /// # Panics
    ///
    /// If `p` is outside the universe.
    pub fn find_mut(&mut self, mut p: usize) -> usize {
        assert!(
            p < self.parent.len(),
            "element {} out of range for universe of {}",
            p,
            self.parent.len()
        );
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// True iff `p` and `q` are in the same set.
    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merge the sets containing `p` and `q`.
    ///
    /// Returns `false` if they were already in the same set. The smaller
    /// tree is attached under the larger one's root.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let rp = self.find_mut(p);
        let rq = self.find_mut(q);
        if rp == rq {
            return false;
        }
        if self.size[rp] < self.size[rq] {
            self.parent[rp] = rq;
            self.size[rq] += self.size[rp];
        } else {
            self.parent[rq] = rp;
            self.size[rp] += self.size[rq];
        }
        self.count -= 1;
        true
    }
}
