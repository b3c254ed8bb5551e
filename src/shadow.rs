// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Shadow extremes for multiplicative updates over min/max trees.
//!
//! Multiplying a range by a negative number turns its largest element into
//! its smallest and vice versa, so a min tree cannot compute the new minimum
//! from the old minimum alone. Every node of such a tree carries both
//! extremes of its range.
//!
//! Why this is exact, including repeated negatives and `min == max`:
//!
//! - `t -> t * x` is monotone for `x >= 0` and antitone for `x < 0`. A
//!   monotone map sends the smallest element of a set to the smallest image,
//!   an antitone map sends the largest element to the smallest image. So
//!   `scale` yields the true extremes of the scaled set, and it does not
//!   matter whether the old extremes were distinct.
//! - `scale(x)` then `scale(y)` equals `scale(x * y)`: the pair is swapped
//!   once per negative factor, so it ends up swapped iff `x * y < 0`, and a
//!   zero factor collapses both ends to zero either way. Pending deltas can
//!   therefore be composed by multiplication.
//! - `scale(x)` distributes over `merge`, since the extremes of a union are
//!   the extremes of the parts' extremes and a (anti)monotone map preserves
//!   (reverses) that order. Scaling a parent equals merging its scaled
//!   children.

use crate::value::Value;

/// The smallest and largest element of a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes<T> {
    pub min: T,
    pub max: T,
}

impl<T: Value> Extremes<T> {
    /// Extremes of a single element.
    pub fn point(value: T) -> Self {
        return Extremes { min: value, max: value };
    }

    /// Extremes of the union of two ranges.
    pub fn merge(self, other: Self) -> Self {
        return Extremes {
            min: self.min.lesser(other.min),
            max: self.max.greater(other.max),
        };
    }

    /// Extremes after multiplying every element by `x`.
    pub fn scale(self, x: T) -> Self {
        if x.is_zero() {
            return Extremes::point(T::ZERO);
        }
        if x.is_negative() {
            return Extremes { min: self.max * x, max: self.min * x };
        }
        return Extremes { min: self.min * x, max: self.max * x };
    }
}
