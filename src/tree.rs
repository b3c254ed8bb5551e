// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Lazy-propagation segment tree.
//!
//! The tree is an implicit binary tree over index ranges stored in flat
//! arrays: node `i` has children `2i + 1` and `2i + 2`, and a node covering
//! `[tl, tr]` splits at `tm = (tl + tr) / 2` into `[tl, tm]` and
//! `[tm + 1, tr]`. The backing arrays hold `4n` slots, enough for any `n`.
//!
//! Range updates stop at the highest nodes that exactly cover the range. The
//! delta is folded into that node's aggregate and left in its `lazy` slot
//! until an operation has to descend past it. Every operation pushes a
//! node's pending delta into its children before it reads or writes them.
//!
//! # Example
//!
//! ```
//! use segtree::policy::{Combination, Update};
//! use segtree::tree::LazySegmentTree;
//!
//! let mut tree = LazySegmentTree::build(&[1i64, 2, 3, 2], Combination::Sum, Update::Add).unwrap();
//! assert_eq!(tree.range_query(0, 3).unwrap(), 8);
//!
//! tree.range_update(1, 3, 4).unwrap();
//! assert_eq!(tree.range_query(1, 3).unwrap(), 19);
//! ```

use std::fmt::Write;

use crate::error::Error;
use crate::error::check_index;
use crate::error::check_range;
use crate::op::Op;
use crate::policy::Combination;
use crate::policy::Policy;
use crate::policy::Update;
use crate::shadow::Extremes;
use crate::value::Value;

/// A segment tree supporting range updates and range queries in O(log n).
#[derive(Clone, Debug)]
pub struct LazySegmentTree<T> {
    /// Number of elements.
    n: usize,
    policy: Policy,
    /// Aggregate of each node's range, including its own pending delta.
    values: Vec<T>,
    /// Delta folded into a node but not yet pushed into its children.
    lazy: Vec<Option<T>>,
    /// Per-node extremes, only for policies that need them.
    shadow: Option<Vec<Extremes<T>>>,
}

impl<T: Value> LazySegmentTree<T> {
    /// Build a tree over `values`, O(n).
    pub fn build(values: &[T], combination: Combination, update: Update) -> Result<Self, Error> {
        let policy = Policy::new(combination, update)?;
        return Self::with_policy(values, policy);
    }

    /// Build a tree over `values` with an already resolved policy.
    pub fn with_policy(values: &[T], policy: Policy) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptyValues);
        }

        let n = values.len();
        let size = 4 * n;
        let mut tree = LazySegmentTree {
            n,
            policy,
            values: vec![policy.identity(); size],
            lazy: vec![None; size],
            shadow: policy
                .tracks_extremes()
                .then(|| vec![Extremes::point(policy.identity()); size]),
        };
        tree.build_node(0, 0, n - 1, values);

        #[cfg(feature = "tracing")]
        tracing::debug!(len = n, policy = %policy, "built segment tree");

        return Ok(tree);
    }

    fn build_node(&mut self, i: usize, tl: usize, tr: usize, values: &[T]) {
        if tl == tr {
            self.values[i] = values[tl];
            if let Some(shadow) = self.shadow.as_mut() {
                shadow[i] = Extremes::point(values[tl]);
            }
            return;
        }
        let tm = (tl + tr) / 2;
        self.build_node(2 * i + 1, tl, tm, values);
        self.build_node(2 * i + 2, tm + 1, tr, values);
        self.pull(i);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        return self.n;
    }

    /// Always false: a tree cannot be built without elements.
    pub fn is_empty(&self) -> bool {
        return self.n == 0;
    }

    pub fn policy(&self) -> Policy {
        return self.policy;
    }

    /// Recompute node `i` from its two children.
    fn pull(&mut self, i: usize) {
        let (left, right) = (2 * i + 1, 2 * i + 2);
        self.values[i] = self.policy.combine(self.values[left], self.values[right]);
        if let Some(shadow) = self.shadow.as_mut() {
            shadow[i] = shadow[left].merge(shadow[right]);
        }
    }

    /// Apply `x` to node `i` covering `len` elements. Internal nodes keep the
    /// delta pending for their children.
    fn apply_node(&mut self, i: usize, len: usize, x: T) {
        let before = self.shadow.as_ref().map(|shadow| shadow[i]);
        self.values[i] = self.policy.apply(self.values[i], before, x, len);
        if let Some(shadow) = self.shadow.as_mut() {
            shadow[i] = shadow[i].scale(x);
        }
        if len > 1 {
            self.lazy[i] = Some(self.policy.compose(self.lazy[i], x));
        }
    }

    /// Push the pending delta of node `i` covering `[tl, tr]` into its children.
    fn propagate(&mut self, i: usize, tl: usize, tr: usize) {
        if tl == tr {
            return;
        }
        let Some(delta) = self.lazy[i].take() else {
            return;
        };
        let tm = (tl + tr) / 2;
        self.apply_node(2 * i + 1, tm - tl + 1, delta);
        self.apply_node(2 * i + 2, tr - tm, delta);
    }

    /// Aggregate of the inclusive range `[l, r]`.
    ///
    /// Takes `&mut self` because reading pushes pending deltas down.
    pub fn range_query(&mut self, l: usize, r: usize) -> Result<T, Error> {
        check_range(l, r, self.n)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("range_query", l, r).entered();

        return Ok(self.query_node(0, 0, self.n - 1, l, r));
    }

    fn query_node(&mut self, i: usize, tl: usize, tr: usize, l: usize, r: usize) -> T {
        // Clipping leaves an empty range on the side that does not overlap.
        if l > r {
            return self.policy.identity();
        }
        self.propagate(i, tl, tr);
        if tl == l && tr == r {
            return self.values[i];
        }
        let tm = (tl + tr) / 2;
        let left = self.query_node(2 * i + 1, tl, tm, l, r.min(tm));
        let right = self.query_node(2 * i + 2, tm + 1, tr, l.max(tm + 1), r);
        return self.policy.combine(left, right);
    }

    /// Current value at `index`.
    pub fn get(&mut self, index: usize) -> Result<T, Error> {
        check_index(index, self.n)?;
        return Ok(self.query_node(0, 0, self.n - 1, index, index));
    }

    /// Overwrite the element at `index`, O(log n).
    pub fn point_update(&mut self, index: usize, value: T) -> Result<(), Error> {
        check_index(index, self.n)?;
        self.point_update_node(0, 0, self.n - 1, index, value);
        return Ok(());
    }

    fn point_update_node(&mut self, i: usize, tl: usize, tr: usize, pos: usize, value: T) {
        if tl == tr {
            self.values[i] = value;
            if let Some(shadow) = self.shadow.as_mut() {
                shadow[i] = Extremes::point(value);
            }
            return;
        }
        // A delta left above the new leaf would be replayed over it later.
        self.propagate(i, tl, tr);
        let tm = (tl + tr) / 2;
        if pos <= tm {
            self.point_update_node(2 * i + 1, tl, tm, pos, value);
        } else {
            self.point_update_node(2 * i + 2, tm + 1, tr, pos, value);
        }
        self.pull(i);
    }

    /// Apply the tree's update with `delta` to every element in `[l, r]`.
    pub fn range_update(&mut self, l: usize, r: usize, delta: T) -> Result<(), Error> {
        check_range(l, r, self.n)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("range_update", l, r, delta = ?delta).entered();

        self.range_update_node(0, 0, self.n - 1, l, r, delta);
        return Ok(());
    }

    fn range_update_node(&mut self, i: usize, tl: usize, tr: usize, l: usize, r: usize, x: T) {
        self.propagate(i, tl, tr);
        if l > r {
            return;
        }
        if tl == l && tr == r {
            self.apply_node(i, tr - tl + 1, x);
            return;
        }
        let tm = (tl + tr) / 2;
        self.range_update_node(2 * i + 1, tl, tm, l, r.min(tm), x);
        self.range_update_node(2 * i + 2, tm + 1, tr, l.max(tm + 1), r, x);
        self.pull(i);
    }

    /// Run one operation, returning the result of a query.
    pub fn apply(&mut self, op: &Op<T>) -> Result<Option<T>, Error> {
        return match *op {
            Op::PointUpdate { index, value } => self.point_update(index, value).map(|_| None),
            Op::RangeUpdate { l, r, delta } => self.range_update(l, r, delta).map(|_| None),
            Op::RangeQuery { l, r } => self.range_query(l, r).map(Some),
        };
    }

    /// Current values of every element.
    pub fn to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.n);
        self.collect_leaves(0, 0, self.n - 1, &mut out);
        return out;
    }

    fn collect_leaves(&mut self, i: usize, tl: usize, tr: usize, out: &mut Vec<T>) {
        if tl == tr {
            out.push(self.values[i]);
            return;
        }
        self.propagate(i, tl, tr);
        let tm = (tl + tr) / 2;
        self.collect_leaves(2 * i + 1, tl, tm, out);
        self.collect_leaves(2 * i + 2, tm + 1, tr, out);
    }

    /// One line per node in pre-order, for debugging.
    pub fn debug_segments(&self) -> String {
        let mut out = String::new();
        self.debug_node(0, 0, self.n - 1, 0, &mut out);
        return out;
    }

    fn debug_node(&self, i: usize, tl: usize, tr: usize, depth: usize, out: &mut String) {
        let _ = write!(
            out,
            "{:indent$}[{}, {}] value = {:?}, lazy = {:?}",
            "",
            tl,
            tr,
            self.values[i],
            self.lazy[i],
            indent = depth * 2
        );
        if let Some(shadow) = self.shadow.as_ref() {
            let _ = write!(out, ", min = {:?}, max = {:?}", shadow[i].min, shadow[i].max);
        }
        out.push('\n');
        if tl == tr {
            return;
        }
        let tm = (tl + tr) / 2;
        self.debug_node(2 * i + 1, tl, tm, depth + 1, out);
        self.debug_node(2 * i + 2, tm + 1, tr, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn tree(values: &[i64], combination: Combination, update: Update) -> LazySegmentTree<i64> {
        LazySegmentTree::build(values, combination, update).unwrap()
    }

    #[test]
    fn sum_queries() {
        let mut st = tree(&[1, 2, 3, 4, 5], Combination::Sum, Update::Add);
        assert_eq!(st.range_query(0, 1).unwrap(), 3);
        assert_eq!(st.range_query(2, 2).unwrap(), 3);
        assert_eq!(st.range_query(0, 4).unwrap(), 15);
    }

    #[test]
    fn sum_add_overlapping_updates() {
        let mut st = tree(&[1, 2, 1, 2, 1], Combination::Sum, Update::Add);
        st.range_update(0, 1, 5).unwrap();
        st.range_update(3, 4, 2).unwrap();
        st.range_update(0, 4, 3).unwrap();

        assert_eq!(st.range_query(0, 0).unwrap(), 1 + 3 + 5);
        assert_eq!(st.range_query(1, 1).unwrap(), 2 + 3 + 5);
        assert_eq!(st.range_query(2, 2).unwrap(), 1 + 3);
        assert_eq!(st.range_query(3, 3).unwrap(), 2 + 3 + 2);
        assert_eq!(st.range_query(4, 4).unwrap(), 1 + 3 + 2);
        assert_eq!(st.range_query(0, 1).unwrap(), 2 * 5 + 2 * 3 + 1 + 2);
        assert_eq!(st.range_query(3, 4).unwrap(), 2 * 2 + 2 * 3 + 2 + 1);
    }

    #[test]
    fn sum_assign() {
        let mut st = tree(&[2, 1, 3, 4, -1], Combination::Sum, Update::Assign);
        st.range_update(3, 4, 2).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 10);
        assert_eq!(st.range_query(3, 3).unwrap(), 2);

        st.range_update(1, 3, 4).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 16);
        assert_eq!(st.range_query(1, 3).unwrap(), 12);
        assert_eq!(st.range_query(3, 4).unwrap(), 6);

        st.range_update(2, 2, 5).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 17);
        assert_eq!(st.range_query(1, 3).unwrap(), 13);
    }

    #[test]
    fn sum_multiply_twice() {
        let mut st = tree(&[1, 4, 5, 3, 2], Combination::Sum, Update::Multiply);
        st.range_update(1, 3, 3).unwrap();
        assert_eq!(st.range_query(1, 3).unwrap(), 4 * 3 + 5 * 3 + 3 * 3);
        assert_eq!(st.range_query(0, 4).unwrap(), 1 + 4 * 3 + 5 * 3 + 3 * 3 + 2);
        st.range_update(1, 3, 2).unwrap();
        assert_eq!(st.range_query(1, 3).unwrap(), (4 + 5 + 3) * 6);
    }

    #[test]
    fn min_add() {
        let mut st = tree(&[2, 1, 3, 4, -1], Combination::Min, Update::Add);
        st.range_update(0, 4, 1).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 0);
        assert_eq!(st.range_query(1, 3).unwrap(), 2);
        assert_eq!(st.range_query(3, 3).unwrap(), 5);

        st.range_update(3, 4, 4).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 2);
        assert_eq!(st.range_query(3, 4).unwrap(), 4);

        st.range_update(1, 3, 3).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 3);
        assert_eq!(st.range_query(2, 2).unwrap(), 7);
        assert_eq!(st.range_query(3, 3).unwrap(), 12);
    }

    #[test]
    fn max_add() {
        let mut st = tree(&[2, 1, 3, 4, -1], Combination::Max, Update::Add);
        st.range_update(0, 4, 1).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 5);
        assert_eq!(st.range_query(0, 1).unwrap(), 3);
        st.range_update(3, 4, 4).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 9);
        assert_eq!(st.range_query(1, 2).unwrap(), 4);
        st.range_update(1, 3, 3).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 12);
        assert_eq!(st.range_query(0, 2).unwrap(), 7);
    }

    #[test]
    fn min_multiply_sign_flip() {
        let mut st = tree(&[2, 1, 3, 4, -1], Combination::Min, Update::Multiply);
        st.range_update(0, 4, -1).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), -4);
        assert_eq!(st.range_query(0, 1).unwrap(), -2);
        st.range_update(0, 4, -1).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), -1);
    }

    #[test]
    fn max_multiply_partial_negation() {
        let mut st = tree(&[2, 1, 3, 4, -1], Combination::Max, Update::Multiply);
        st.range_update(2, 4, -2).unwrap();
        assert_eq!(st.to_vec(), vec![2, 1, -6, -8, 2]);
        assert_eq!(st.range_query(0, 4).unwrap(), 2);
        assert_eq!(st.range_query(2, 3).unwrap(), -6);
        st.range_update(0, 4, 0).unwrap();
        assert_eq!(st.range_query(0, 4).unwrap(), 0);
    }

    #[test]
    fn product_updates() {
        let mut st = tree(&[1, 2, 3, 4], Combination::Product, Update::Multiply);
        assert_eq!(st.range_query(0, 3).unwrap(), 24);
        st.range_update(1, 2, 2).unwrap();
        assert_eq!(st.range_query(0, 3).unwrap(), 96);
        assert_eq!(st.range_query(1, 1).unwrap(), 4);

        let mut st = tree(&[1, 2, 3, 4], Combination::Product, Update::Assign);
        st.range_update(0, 2, 3).unwrap();
        assert_eq!(st.range_query(0, 3).unwrap(), 108);
    }

    #[test]
    fn point_update_after_pending_delta() {
        let mut st = tree(&[1, 1, 1, 1, 1, 1], Combination::Sum, Update::Assign);
        st.range_update(0, 5, 7).unwrap();
        st.point_update(2, 100).unwrap();
        assert_eq!(st.to_vec(), vec![7, 7, 100, 7, 7, 7]);
        assert_eq!(st.range_query(0, 5).unwrap(), 135);
    }

    #[test]
    fn point_update_keeps_extremes() {
        let mut st = tree(&[5, 6, 7, 8], Combination::Min, Update::Multiply);
        st.point_update(3, -9).unwrap();
        st.range_update(0, 3, -1).unwrap();
        assert_eq!(st.range_query(0, 3).unwrap(), -7);
        assert_eq!(st.range_query(3, 3).unwrap(), 9);
    }

    #[test]
    fn single_element() {
        let mut st = tree(&[42], Combination::Max, Update::Add);
        st.range_update(0, 0, 8).unwrap();
        assert_eq!(st.range_query(0, 0).unwrap(), 50);
        st.point_update(0, -1).unwrap();
        assert_eq!(st.get(0).unwrap(), -1);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            LazySegmentTree::<i64>::build(&[], Combination::Sum, Update::Add).unwrap_err(),
            Error::EmptyValues
        );
        let err = LazySegmentTree::build(&[1i64], Combination::Product, Update::Add).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let mut st = tree(&[1, 2, 3], Combination::Sum, Update::Add);
        assert_eq!(st.range_query(2, 1).unwrap_err().kind(), ErrorKind::Precondition);
        assert_eq!(st.range_query(0, 3).unwrap_err().kind(), ErrorKind::Precondition);
        assert_eq!(st.range_update(1, 5, 1).unwrap_err().kind(), ErrorKind::Precondition);
        assert_eq!(st.point_update(3, 0).unwrap_err().kind(), ErrorKind::Precondition);
        // Nothing was applied.
        assert_eq!(st.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn apply_ops() {
        let mut st = tree(&[1, 2, 3, 2, 1], Combination::Sum, Update::Multiply);
        assert_eq!(st.apply(&Op::RangeUpdate { l: 1, r: 3, delta: 3 }).unwrap(), None);
        assert_eq!(st.apply(&Op::RangeQuery { l: 1, r: 3 }).unwrap(), Some(21));
        assert_eq!(st.apply(&Op::PointUpdate { index: 0, value: 10 }).unwrap(), None);
        assert_eq!(st.apply(&Op::RangeQuery { l: 0, r: 0 }).unwrap(), Some(10));
    }

    #[test]
    fn floats() {
        let mut st = LazySegmentTree::build(&[0.5f64, -1.5, 2.0], Combination::Max, Update::Multiply).unwrap();
        st.range_update(0, 2, -2.0).unwrap();
        assert_eq!(st.range_query(0, 2).unwrap(), 3.0);
        assert_eq!(st.range_query(2, 2).unwrap(), -4.0);
    }

    #[test]
    fn debug_dump_lists_every_node() {
        let mut st = tree(&[2, 1, 3], Combination::Min, Update::Multiply);
        st.range_update(0, 2, -1).unwrap();
        let dump = st.debug_segments();
        assert_eq!(dump.lines().count(), 5);
        assert!(dump.starts_with("[0, 2] value = -3, lazy = Some(-1), min = -3, max = -1"));
    }
}
