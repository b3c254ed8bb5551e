// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Compact bottom-up segment tree with point updates only.
//!
//! Leaves live at `tree[n..2n]` and node `i` combines `tree[2i]` and
//! `tree[2i + 1]`; `tree[0]` is unused. There is no lazy state, which keeps
//! this variant small enough to serve as a baseline for the lazy tree.

use crate::error::Error;
use crate::error::check_index;
use crate::error::check_range;
use crate::policy::Combination;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct CompactSegmentTree<T> {
    n: usize,
    combination: Combination,
    tree: Vec<T>,
}

impl<T: Value> CompactSegmentTree<T> {
    /// Build over `values` in O(n).
    pub fn build(values: &[T], combination: Combination) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptyValues);
        }
        let n = values.len();
        let mut tree = vec![combination.identity(); 2 * n];
        tree[n..].copy_from_slice(values);
        for i in (1..n).rev() {
            tree[i] = combination.combine(tree[2 * i], tree[2 * i + 1]);
        }
        return Ok(CompactSegmentTree { n, combination, tree });
    }

    pub fn len(&self) -> usize {
        return self.n;
    }

    pub fn is_empty(&self) -> bool {
        return self.n == 0;
    }

    pub fn combination(&self) -> Combination {
        return self.combination;
    }

    /// Overwrite the element at `index`, O(log n).
    pub fn point_update(&mut self, index: usize, value: T) -> Result<(), Error> {
        check_index(index, self.n)?;
        self.tree[index + self.n] = value;
        self.fix_ancestors(index + self.n);
        return Ok(());
    }

    /// Combine `value` into the element at `index`, e.g. add it for a sum tree.
    pub fn modify(&mut self, index: usize, value: T) -> Result<(), Error> {
        check_index(index, self.n)?;
        let leaf = index + self.n;
        self.tree[leaf] = self.combination.combine(self.tree[leaf], value);
        self.fix_ancestors(leaf);
        return Ok(());
    }

    fn fix_ancestors(&mut self, mut i: usize) {
        while i > 1 {
            self.tree[i >> 1] = self.combination.combine(self.tree[i], self.tree[i ^ 1]);
            i >>= 1;
        }
    }

    /// Aggregate of the inclusive range `[l, r]`, O(log n).
    pub fn range_query(&self, l: usize, r: usize) -> Result<T, Error> {
        check_range(l, r, self.n)?;
        let mut acc: Option<T> = None;
        let mut take = |v: T| {
            acc = Some(match acc {
                Some(a) => self.combination.combine(a, v),
                None => v,
            });
        };
        // Walk the half-open range [l, r + 1) upwards.
        let (mut lo, mut hi) = (l + self.n, r + 1 + self.n);
        while lo < hi {
            if lo & 1 == 1 {
                take(self.tree[lo]);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                take(self.tree[hi]);
            }
            lo >>= 1;
            hi >>= 1;
        }
        // A non-empty range always visits at least one node.
        return Ok(acc.unwrap_or_else(|| self.combination.identity()));
    }
}
