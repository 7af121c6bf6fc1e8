//! # Rational numbers
//!
//! Exact arithmetic, which makes the zero tests in the algorithms trustworthy. Values are limited
//! to fractions of two `i64` values; intermediate results that don't fit overflow.
use std::cmp::Ordering;

use num_rational::Rational64;
use num_traits::{ToPrimitive, Zero};

use crate::data::number_types::traits::OperationSet;

/// Operations on `Rational64`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RationalOperations;

impl OperationSet for RationalOperations {
    type Element = Rational64;

    fn zero(&self) -> Rational64 {
        Rational64::zero()
    }

    fn unit(&self) -> Rational64 {
        Rational64::from_integer(1)
    }

    fn add(&self, left: &Rational64, right: &Rational64) -> Rational64 {
        left + right
    }

    fn subtract(&self, left: &Rational64, right: &Rational64) -> Rational64 {
        left - right
    }

    fn multiply(&self, left: &Rational64, right: &Rational64) -> Rational64 {
        left * right
    }

    /// # Panics
    ///
    /// When `right` is zero.
    fn divide(&self, left: &Rational64, right: &Rational64) -> Rational64 {
        left / right
    }

    /// # Panics
    ///
    /// When `value` is zero.
    fn inverse(&self, value: &Rational64) -> Rational64 {
        value.recip()
    }

    fn negate(&self, value: &Rational64) -> Rational64 {
        -value
    }

    fn to_f64(&self, value: &Rational64) -> f64 {
        match (value.numer().to_f64(), value.denom().to_f64()) {
            (Some(numerator), Some(denominator)) => numerator / denominator,
            _ => f64::NAN,
        }
    }

    /// Closest fraction representable with `i64` parts, zero when there is none (e.g. for NaN).
    fn from_f64(&self, value: f64) -> Rational64 {
        Rational64::approximate_float(value).unwrap_or_else(Rational64::zero)
    }

    fn compare(&self, left: &Rational64, right: &Rational64) -> Ordering {
        left.cmp(right)
    }
}

/// Shorthand for creating a rational number.
///
/// # Arguments
///
/// * `numerator`: Numerator of the fraction.
/// * `denominator`: Nonzero denominator of the fraction.
pub fn rational(numerator: i64, denominator: i64) -> Rational64 {
    debug_assert_ne!(denominator, 0);

    Rational64::new(numerator, denominator)
}

#[cfg(test)]
mod test {
    use crate::data::number_types::rational::{rational, RationalOperations};
    use crate::data::number_types::traits::OperationSet;

    #[test]
    fn exact() {
        let ops = RationalOperations;
        let third = rational(1, 3);
        assert_eq!(ops.add(&third, &third), rational(2, 3));
        assert_eq!(ops.multiply(&third, &rational(3, 1)), ops.unit());
        assert_eq!(ops.inverse(&rational(-2, 5)), rational(-5, 2));
        assert_eq!(ops.divide(&rational(1, 2), &rational(1, 4)), rational(2, 1));
        assert!(ops.is_zero(&ops.subtract(&third, &third)));
        assert!(!ops.is_negligible(&rational(1, 10_000_000_000)));
    }

    #[test]
    fn conversion() {
        let ops = RationalOperations;
        assert_eq!(ops.from_f64(0.5), rational(1, 2));
        assert_eq!(ops.from_f64(-3f64), rational(-3, 1));
        assert_eq!(ops.to_f64(&rational(3, 4)), 0.75);
        assert_eq!(ops.from_f64(f64::NAN), ops.zero());
    }
}
