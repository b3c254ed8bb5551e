// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Educational pointer-based segment tree.
//!
//! The main crate stores its tree in a flat array and indexes children
//! arithmetically. This crate builds the same structure out of boxed nodes,
//! which is easier to draw on a whiteboard and to step through in a debugger:
//!
//! ```text
//!              [0, 4) sum=10 min=1
//!             /                   \
//!    [0, 2) sum=3 min=1     [2, 4) sum=7 min=3
//!     /         \             /         \
//! [0, 1) 1   [1, 2) 2     [2, 3) 3   [3, 4) 4
//! ```
//!
//! Ranges are half-open. Every node covers `[lo, hi)` and its children split
//! that at `mid = (lo + hi) / 2`. The tree supports one update, adding a
//! delta to a range, and two queries, sum and minimum.
//!
//! # Lazy adds
//!
//! An add covering a whole node is recorded on that node and not pushed
//! further. The node's own `sum` and `min` already include it; `pending`
//! holds what its descendants still owe. Queries never push: on the way down
//! they add the pending deltas of every partially covered ancestor, so they
//! only need `&self`.
//!
//! # Example
//!
//! ```
//! use pedagogy::SegmentNode;
//!
//! let mut tree = SegmentNode::new(&[1, 2, 3, 4]).unwrap();
//! assert_eq!(tree.sum(0, 4), 10);
//!
//! tree.add(1, 3, 5);
//! assert_eq!(tree.sum(0, 4), 20);
//! assert_eq!(tree.min(1, 4), Some(4));
//! assert_eq!(tree.min(2, 2), None);
//! ```

use std::fmt;

/// Error returned when a tree would cover no elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `new` was given an empty slice.
    EmptyValues,
    /// `with_len` was given zero.
    ZeroLength,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            BuildError::EmptyValues => write!(f, "cannot build a segment tree over no values"),
            BuildError::ZeroLength => write!(f, "segment tree length must be positive"),
        };
    }
}

impl std::error::Error for BuildError {}

/// One node of the tree, owning its children.
#[derive(Debug, Clone)]
pub struct SegmentNode {
    lo: usize,
    hi: usize,
    sum: i64,
    min: i64,
    /// Added to this whole segment but not yet to the children.
    pending: i64,
    children: Option<Box<(SegmentNode, SegmentNode)>>,
}

impl SegmentNode {
    /// Build a tree over `values`.
    pub fn new(values: &[i64]) -> Result<SegmentNode, BuildError> {
        if values.is_empty() {
            return Err(BuildError::EmptyValues);
        }
        return Ok(SegmentNode::build(values, 0, values.len()));
    }

    /// Build a tree of `len` zeros.
    pub fn with_len(len: usize) -> Result<SegmentNode, BuildError> {
        if len == 0 {
            return Err(BuildError::ZeroLength);
        }
        return Ok(SegmentNode::build(&vec![0; len], 0, len));
    }

    fn build(values: &[i64], lo: usize, hi: usize) -> SegmentNode {
        if hi - lo == 1 {
            return SegmentNode { lo, hi, sum: values[lo], min: values[lo], pending: 0, children: None };
        }
        let mid = (lo + hi) / 2;
        let left = SegmentNode::build(values, lo, mid);
        let right = SegmentNode::build(values, mid, hi);
        return SegmentNode {
            lo,
            hi,
            sum: left.sum + right.sum,
            min: left.min.min(right.min),
            pending: 0,
            children: Some(Box::new((left, right))),
        };
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        return self.hi - self.lo;
    }

    /// Always false; a tree covers at least one element.
    pub fn is_empty(&self) -> bool {
        return false;
    }

    /// Width of the overlap between this node and `[l, r)`.
    fn overlap(&self, l: usize, r: usize) -> usize {
        return r.min(self.hi).saturating_sub(l.max(self.lo));
    }

    /// Add `delta` to every element in `[l, r)`. Parts of the range outside
    /// the tree are ignored.
    pub fn add(&mut self, l: usize, r: usize, delta: i64) {
        if self.overlap(l, r) == 0 {
            return;
        }
        if l <= self.lo && self.hi <= r {
            self.sum += delta * self.len() as i64;
            self.min += delta;
            if self.children.is_some() {
                self.pending += delta;
            }
            return;
        }
        // Partially covered, so this is an inner node.
        let width = self.len() as i64;
        if let Some(children) = self.children.as_mut() {
            let (left, right) = &mut **children;
            left.add(l, r, delta);
            right.add(l, r, delta);
            self.sum = left.sum + right.sum + self.pending * width;
            self.min = left.min.min(right.min) + self.pending;
        }
    }

    /// Sum over `[l, r)`; zero when the range is empty.
    pub fn sum(&self, l: usize, r: usize) -> i64 {
        let width = self.overlap(l, r);
        if width == 0 {
            return 0;
        }
        if l <= self.lo && self.hi <= r {
            return self.sum;
        }
        return match &self.children {
            Some(children) => children.0.sum(l, r) + children.1.sum(l, r) + self.pending * width as i64,
            None => self.sum,
        };
    }

    /// Minimum over `[l, r)`, or `None` when the range is empty.
    pub fn min(&self, l: usize, r: usize) -> Option<i64> {
        if self.overlap(l, r) == 0 {
            return None;
        }
        if l <= self.lo && self.hi <= r {
            return Some(self.min);
        }
        let children = self.children.as_ref()?;
        let below = match (children.0.min(l, r), children.1.min(l, r)) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return None,
        };
        return Some(below + self.pending);
    }

    /// Render the tree one node per line, indented by depth.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        return out;
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        out.push_str(&format!(
            "{}[{}, {}) sum={} min={} pending={}\n",
            "  ".repeat(depth),
            self.lo,
            self.hi,
            self.sum,
            self.min,
            self.pending
        ));
        if let Some(children) = &self.children {
            children.0.dump_into(out, depth + 1);
            children.1.dump_into(out, depth + 1);
        }
    }
}
