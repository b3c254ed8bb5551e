// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Aggregation and range-update policies.
//!
//! A tree is configured with a [`Combination`] (how sibling segments fold
//! into their parent) and an [`Update`] (what a range update does to each
//! element). Each supported pair resolves to one [`Policy`] variant carrying
//! its own *apply* rule (how a delta changes a node's aggregate) and
//! *compose* rule (how a delta merges into a delta still pending on a node).
//!
//! | Combination | Update   | apply(aggregate, x, len)            | compose(pending, x) |
//! |-------------|----------|-------------------------------------|---------------------|
//! | sum         | add      | aggregate + x * len                 | pending + x         |
//! | sum         | assign   | x * len                             | x                   |
//! | sum         | multiply | aggregate * x                       | pending * x         |
//! | min, max    | add      | aggregate + x                       | pending + x         |
//! | min, max    | assign   | x                                   | x                   |
//! | min, max    | multiply | picked from the scaled [`Extremes`] | pending * x         |
//! | product     | assign   | x ^ len                             | x                   |
//! | product     | multiply | aggregate * x ^ len                 | pending * x         |
//!
//! Product with add has no lazy form and is rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::shadow::Extremes;
use crate::value::Value;

/// How two adjacent segments combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combination {
    Sum,
    Min,
    Max,
    Product,
}

/// What a range update does to each element in the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Update {
    /// Every element becomes `x`.
    Assign,
    /// `x` is added to every element.
    Add,
    /// Every element is multiplied by `x`.
    Multiply,
}

impl Combination {
    pub const ALL: [Combination; 4] = [Combination::Sum, Combination::Min, Combination::Max, Combination::Product];

    /// The value an empty range aggregates to.
    pub fn identity<T: Value>(self) -> T {
        match self {
            Combination::Sum => T::ZERO,
            Combination::Min => T::UPPER,
            Combination::Max => T::LOWER,
            Combination::Product => T::ONE,
        }
    }

    pub fn combine<T: Value>(self, a: T, b: T) -> T {
        match self {
            Combination::Sum => a + b,
            Combination::Min => a.lesser(b),
            Combination::Max => a.greater(b),
            Combination::Product => a * b,
        }
    }
}

impl Update {
    pub const ALL: [Update; 3] = [Update::Assign, Update::Add, Update::Multiply];

    /// The new value of a single element.
    pub fn apply_one<T: Value>(self, value: T, x: T) -> T {
        match self {
            Update::Assign => x,
            Update::Add => value + x,
            Update::Multiply => value * x,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Combination::Sum => "sum",
            Combination::Min => "min",
            Combination::Max => "max",
            Combination::Product => "product",
        };
        return f.write_str(name);
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Update::Assign => "assign",
            Update::Add => "add",
            Update::Multiply => "multiply",
        };
        return f.write_str(name);
    }
}

impl FromStr for Combination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sum" => Ok(Combination::Sum),
            "min" => Ok(Combination::Min),
            "max" => Ok(Combination::Max),
            "product" => Ok(Combination::Product),
            _ => Err(Error::UnknownName { what: "combination", name: s.to_string() }),
        }
    }
}

impl FromStr for Update {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "assign" => Ok(Update::Assign),
            "add" | "addition" => Ok(Update::Add),
            "multiply" | "multiplication" => Ok(Update::Multiply),
            _ => Err(Error::UnknownName { what: "update", name: s.to_string() }),
        }
    }
}

/// Which extreme a min/max tree reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extreme {
    Min,
    Max,
}

impl Extreme {
    pub fn pick<T: Value>(self, extremes: Extremes<T>) -> T {
        match self {
            Extreme::Min => extremes.min,
            Extreme::Max => extremes.max,
        }
    }
}

/// A supported (combination, update) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    SumAdd,
    SumAssign,
    SumMultiply,
    ExtremeAdd(Extreme),
    ExtremeAssign(Extreme),
    ExtremeMultiply(Extreme),
    ProductAssign,
    ProductMultiply,
}

impl Policy {
    /// Resolve a pair, failing if it has no apply/compose rules.
    pub fn new(combination: Combination, update: Update) -> Result<Policy, Error> {
        use Combination as C;
        use Update as U;
        let policy = match (combination, update) {
            (C::Sum, U::Add) => Policy::SumAdd,
            (C::Sum, U::Assign) => Policy::SumAssign,
            (C::Sum, U::Multiply) => Policy::SumMultiply,
            (C::Min, U::Add) => Policy::ExtremeAdd(Extreme::Min),
            (C::Min, U::Assign) => Policy::ExtremeAssign(Extreme::Min),
            (C::Min, U::Multiply) => Policy::ExtremeMultiply(Extreme::Min),
            (C::Max, U::Add) => Policy::ExtremeAdd(Extreme::Max),
            (C::Max, U::Assign) => Policy::ExtremeAssign(Extreme::Max),
            (C::Max, U::Multiply) => Policy::ExtremeMultiply(Extreme::Max),
            (C::Product, U::Assign) => Policy::ProductAssign,
            (C::Product, U::Multiply) => Policy::ProductMultiply,
            (C::Product, U::Add) => return Err(Error::UnsupportedPolicy { combination, update }),
        };
        return Ok(policy);
    }

    pub fn combination(self) -> Combination {
        match self {
            Policy::SumAdd | Policy::SumAssign | Policy::SumMultiply => Combination::Sum,
            Policy::ExtremeAdd(e) | Policy::ExtremeAssign(e) | Policy::ExtremeMultiply(e) => match e {
                Extreme::Min => Combination::Min,
                Extreme::Max => Combination::Max,
            },
            Policy::ProductAssign | Policy::ProductMultiply => Combination::Product,
        }
    }

    pub fn update(self) -> Update {
        match self {
            Policy::SumAdd | Policy::ExtremeAdd(_) => Update::Add,
            Policy::SumAssign | Policy::ExtremeAssign(_) | Policy::ProductAssign => Update::Assign,
            Policy::SumMultiply | Policy::ExtremeMultiply(_) | Policy::ProductMultiply => Update::Multiply,
        }
    }

    /// Whether nodes need shadow [`Extremes`] to apply a delta.
    pub fn tracks_extremes(self) -> bool {
        return matches!(self, Policy::ExtremeMultiply(_));
    }

    pub fn identity<T: Value>(self) -> T {
        return self.combination().identity();
    }

    pub fn combine<T: Value>(self, a: T, b: T) -> T {
        return self.combination().combine(a, b);
    }

    /// The aggregate of a segment of `len` elements after applying `x`.
    ///
    /// `shadow` holds the segment's extremes before the update. Only
    /// `ExtremeMultiply` reads it; without one the segment is treated as a
    /// single element.
    pub fn apply<T: Value>(self, aggregate: T, shadow: Option<Extremes<T>>, x: T, len: usize) -> T {
        match self {
            Policy::SumAdd => aggregate + x * T::from_len(len),
            Policy::SumAssign => x * T::from_len(len),
            Policy::SumMultiply => aggregate * x,
            Policy::ExtremeAdd(_) => aggregate + x,
            Policy::ExtremeAssign(_) => x,
            Policy::ExtremeMultiply(extreme) => {
                let before = shadow.unwrap_or(Extremes::point(aggregate));
                extreme.pick(before.scale(x))
            }
            Policy::ProductAssign => x.pow(len),
            Policy::ProductMultiply => aggregate * x.pow(len),
        }
    }

    /// Merge `x` into a delta that is still pending, `x` applying last.
    pub fn compose<T: Value>(self, pending: Option<T>, x: T) -> T {
        let Some(pending) = pending else {
            return x;
        };
        match self.update() {
            Update::Assign => x,
            Update::Add => pending + x,
            Update::Multiply => pending * x,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}/{}", self.combination(), self.update());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_but_product_add_resolves() {
        for combination in Combination::ALL {
            for update in Update::ALL {
                let resolved = Policy::new(combination, update);
                if (combination, update) == (Combination::Product, Update::Add) {
                    assert_eq!(resolved, Err(Error::UnsupportedPolicy { combination, update }));
                } else {
                    let policy = resolved.unwrap();
                    assert_eq!(policy.combination(), combination);
                    assert_eq!(policy.update(), update);
                }
            }
        }
    }

    #[test]
    fn identities() {
        assert_eq!(Combination::Sum.identity::<i64>(), 0);
        assert_eq!(Combination::Min.identity::<i64>(), i64::MAX);
        assert_eq!(Combination::Max.identity::<i64>(), i64::MIN);
        assert_eq!(Combination::Product.identity::<i64>(), 1);
        assert_eq!(Combination::Min.identity::<f64>(), f64::INFINITY);
        for combination in Combination::ALL {
            assert_eq!(combination.combine(combination.identity(), -7i64), -7);
        }
    }

    #[test]
    fn sum_apply_scales_by_length() {
        assert_eq!(Policy::SumAdd.apply(10i64, None, 3, 4), 22);
        assert_eq!(Policy::SumAssign.apply(10i64, None, 3, 4), 12);
        assert_eq!(Policy::SumMultiply.apply(10i64, None, 3, 4), 30);
    }

    #[test]
    fn extreme_apply_ignores_length() {
        let min = Policy::ExtremeAdd(Extreme::Min);
        assert_eq!(min.apply(5i64, None, 3, 100), 8);
        assert_eq!(Policy::ExtremeAssign(Extreme::Max).apply(5i64, None, -2, 100), -2);
    }

    #[test]
    fn extreme_multiply_uses_the_opposite_extreme_when_negative() {
        let shadow = Some(Extremes { min: -1i64, max: 4 });
        let min = Policy::ExtremeMultiply(Extreme::Min);
        let max = Policy::ExtremeMultiply(Extreme::Max);
        assert_eq!(min.apply(-1, shadow, -1, 5), -4);
        assert_eq!(max.apply(4, shadow, -1, 5), 1);
        assert_eq!(min.apply(-1, shadow, 3, 5), -3);
        assert_eq!(max.apply(4, shadow, 0, 5), 0);
    }

    #[test]
    fn product_apply_raises_to_length() {
        assert_eq!(Policy::ProductAssign.apply(99i64, None, 2, 3), 8);
        assert_eq!(Policy::ProductMultiply.apply(6i64, None, 2, 3), 48);
    }

    #[test]
    fn compose_rules() {
        assert_eq!(Policy::SumAdd.compose(None, 3i64), 3);
        assert_eq!(Policy::SumAdd.compose(Some(2i64), 3), 5);
        assert_eq!(Policy::ExtremeAssign(Extreme::Min).compose(Some(2i64), 3), 3);
        assert_eq!(Policy::ExtremeMultiply(Extreme::Max).compose(Some(-2i64), -3), 6);
        assert_eq!(Policy::ProductMultiply.compose(Some(2i64), 0), 0);
    }

    #[test]
    fn names_parse() {
        assert_eq!("SUM".parse::<Combination>(), Ok(Combination::Sum));
        assert_eq!("product".parse::<Combination>(), Ok(Combination::Product));
        assert_eq!("multiplication".parse::<Update>(), Ok(Update::Multiply));
        assert_eq!(
            "xor".parse::<Combination>(),
            Err(Error::UnknownName { what: "combination", name: "xor".to_string() })
        );
        assert_eq!(Policy::ExtremeMultiply(Extreme::Min).to_string(), "min/multiply");
    }
}
