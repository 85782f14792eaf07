//! # tabula-truth
//!
//! The truth-valued element type for tabula matrices.
//!
//! Comparison operations over a matrix produce a matrix of truth values.
//! The raw `bool` primitive is not accepted as a matrix element type, so
//! this crate provides [`Truth`]: a one-byte value carrying `false` or
//! `true` with the full operator set a matrix element needs, including
//! an arithmetic where `+` is logical OR and `*` is logical AND.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Mul, MulAssign, Not, Sub, SubAssign};

use num_traits::{One, Zero};

/// A one-byte truth value.
///
/// `Truth` stores `0` or `1` in a single addressable byte, so a
/// `Matrix<Truth>` hands out ordinary references to its cells where a
/// bit-packed boolean container could not.
///
/// The arithmetic is logical rather than numeric:
///
/// - `+` is OR, so summing a truth matrix answers "any true",
/// - `*` is AND, so multiplying answers "all true",
/// - `-` is the signed difference of the 0/1 representations squashed
///   back through truthiness, so `a - b` is true exactly when the two
///   operands differ.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Truth(u8);

impl Truth {
    /// The false value.
    pub const FALSE: Self = Self(0);

    /// The true value.
    pub const TRUE: Self = Self(1);

    /// Creates a truth value from a `bool`.
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(value as u8)
    }

    /// Returns the value as a `bool`.
    #[must_use]
    pub const fn value(self) -> bool {
        self.0 != 0
    }

    /// Converts any numeric value through its truthiness.
    ///
    /// Zero maps to false, everything else to true.
    #[must_use]
    pub fn from_truthy<T: Zero>(value: T) -> Self {
        Self::new(!value.is_zero())
    }
}

impl Not for Truth {
    type Output = Self;

    fn not(self) -> Self {
        Self::new(!self.value())
    }
}

impl BitAnd for Truth {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::new(self.value() && rhs.value())
    }
}

impl BitOr for Truth {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::new(self.value() || rhs.value())
    }
}

impl Add for Truth {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self | rhs
    }
}

impl Sub for Truth {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // i16 difference of the 0/1 representations, then truthiness:
        // -1 and 1 are both non-zero, so this is "operands differ".
        Self::new(i16::from(self.0) - i16::from(rhs.0) != 0)
    }
}

impl Mul for Truth {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self & rhs
    }
}

impl AddAssign for Truth {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Truth {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Truth {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Zero for Truth {
    fn zero() -> Self {
        Self::FALSE
    }

    fn is_zero(&self) -> bool {
        !self.value()
    }
}

impl One for Truth {
    fn one() -> Self {
        Self::TRUE
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<Truth> for bool {
    fn from(value: Truth) -> Self {
        value.value()
    }
}

macro_rules! impl_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Truth {
                fn from(value: $t) -> Self {
                    Self::from_truthy(value)
                }
            }
        )*
    };
}

impl_from_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

    #[test]
    fn test_default_is_false() {
        assert_eq!(Truth::default(), Truth::FALSE);
        assert!(!Truth::default().value());
    }

    #[test]
    fn test_add_is_or() {
        for (a, b) in CASES {
            assert_eq!(Truth::new(a) + Truth::new(b), Truth::new(a || b));
        }
    }

    #[test]
    fn test_mul_is_and() {
        for (a, b) in CASES {
            assert_eq!(Truth::new(a) * Truth::new(b), Truth::new(a && b));
        }
    }

    #[test]
    fn test_sub_is_mismatch() {
        for (a, b) in CASES {
            assert_eq!(Truth::new(a) - Truth::new(b), Truth::new(a != b));
        }
    }

    #[test]
    fn test_not() {
        assert_eq!(!Truth::TRUE, Truth::FALSE);
        assert_eq!(!Truth::FALSE, Truth::TRUE);
    }

    #[test]
    fn test_logical_operators() {
        for (a, b) in CASES {
            assert_eq!(Truth::new(a) & Truth::new(b), Truth::new(a && b));
            assert_eq!(Truth::new(a) | Truth::new(b), Truth::new(a || b));
        }
    }

    #[test]
    fn test_assign_forms() {
        let mut t = Truth::TRUE;
        t += Truth::FALSE;
        assert_eq!(t, Truth::TRUE);
        t -= Truth::TRUE;
        assert_eq!(t, Truth::FALSE);
        t += Truth::TRUE;
        t *= Truth::TRUE;
        assert_eq!(t, Truth::TRUE);
    }

    #[test]
    fn test_ordering() {
        assert!(Truth::FALSE < Truth::TRUE);
        assert!(Truth::TRUE >= Truth::TRUE);
    }

    #[test]
    fn test_truthiness_conversions() {
        assert_eq!(Truth::from(0), Truth::FALSE);
        assert_eq!(Truth::from(-3), Truth::TRUE);
        assert_eq!(Truth::from(0.0), Truth::FALSE);
        assert_eq!(Truth::from(2.5), Truth::TRUE);
        assert_eq!(Truth::from(true), Truth::TRUE);
        assert!(bool::from(Truth::TRUE));
    }

    #[test]
    fn test_zero_one() {
        assert!(Truth::zero().is_zero());
        assert_eq!(Truth::one(), Truth::TRUE);
        // OR-identity: false + x == x
        assert_eq!(Truth::zero() + Truth::TRUE, Truth::TRUE);
        assert_eq!(Truth::zero() + Truth::FALSE, Truth::FALSE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Truth::TRUE.to_string(), "1");
        assert_eq!(Truth::FALSE.to_string(), "0");
    }
}
