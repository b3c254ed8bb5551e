// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Operations that can be replayed against a tree or a reference model.

/// A single tree operation. Ranges are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op<T> {
    /// Overwrite one element.
    PointUpdate { index: usize, value: T },
    /// Apply the configured update with `delta` to `[l, r]`.
    RangeUpdate { l: usize, r: usize, delta: T },
    /// Aggregate `[l, r]`.
    RangeQuery { l: usize, r: usize },
}

impl<T> Op<T> {
    pub fn is_query(&self) -> bool {
        return matches!(self, Op::RangeQuery { .. });
    }
}
