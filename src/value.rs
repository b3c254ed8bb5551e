// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Numeric element types a segment tree can hold.

use std::fmt::Debug;
use std::ops::Add;
use std::ops::Mul;

/// A numeric element stored in a segment tree.
///
/// Integer arithmetic uses the plain operators, so overflow panics in debug
/// builds and wraps in release builds, exactly like the element type itself.
pub trait Value: Copy + Debug + PartialEq + PartialOrd + Add<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;
    const ONE: Self;
    /// The largest representable value, the identity of `min`.
    const UPPER: Self;
    /// The smallest representable value, the identity of `max`.
    const LOWER: Self;

    /// Convert a segment length into the element type.
    fn from_len(len: usize) -> Self;

    fn is_zero(self) -> bool {
        return self == Self::ZERO;
    }

    fn is_negative(self) -> bool {
        return self < Self::ZERO;
    }

    fn lesser(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    fn greater(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Raise to a non-negative power by repeated squaring.
    fn pow(self, mut exp: usize) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base;
            }
            exp >>= 1;
            if exp > 0 {
                base = base * base;
            }
        }
        return acc;
    }
}

macro_rules! impl_int_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const UPPER: Self = <$t>::MAX;
                const LOWER: Self = <$t>::MIN;

                fn from_len(len: usize) -> Self {
                    return len as $t;
                }
            }
        )*
    };
}

macro_rules! impl_float_value {
    ($($t:ty),*) => {
        $(
            impl Value for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const UPPER: Self = <$t>::INFINITY;
                const LOWER: Self = <$t>::NEG_INFINITY;

                fn from_len(len: usize) -> Self {
                    return len as $t;
                }
            }
        )*
    };
}

impl_int_value!(i32, i64, i128, isize);
impl_float_value!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_by_squaring() {
        assert_eq!(Value::pow(3i64, 0), 1);
        assert_eq!(Value::pow(3i64, 1), 3);
        assert_eq!(Value::pow(3i64, 5), 243);
        assert_eq!(Value::pow(-2i64, 3), -8);
        assert_eq!(Value::pow(0i64, 0), 1);
        assert_eq!(Value::pow(2.0f64, 10), 1024.0);
    }

    #[test]
    fn lesser_and_greater() {
        assert_eq!(4i64.lesser(-1), -1);
        assert_eq!(4i64.greater(-1), 4);
        assert_eq!(1.5f64.lesser(2.5), 1.5);
        assert_eq!(f64::LOWER.greater(-7.0), -7.0);
    }

    #[test]
    fn sign_checks() {
        assert!((-3i32).is_negative());
        assert!(!0i32.is_negative());
        assert!(0i128.is_zero());
        assert!(!(-0.5f64).is_zero());
    }
}
