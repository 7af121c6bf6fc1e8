//! # Integers
//!
//! Integers don't form a field: division truncates and the multiplicative inverse of anything but
//! plus or minus one is zero. Useful for cost matrices of the assignment problem, where only
//! additions, subtractions and comparisons are needed.
use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::{NumCast, PrimInt, Signed};

use crate::data::number_types::traits::OperationSet;

/// Operations on a signed primitive integer type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IntegerOperations<I> {
    phantom: PhantomData<I>,
}

impl<I> IntegerOperations<I> {
    /// Create a new instance.
    pub fn new() -> Self {
        Self { phantom: PhantomData }
    }
}

impl<I: PrimInt + Signed + Debug> OperationSet for IntegerOperations<I> {
    type Element = I;

    fn zero(&self) -> I {
        I::zero()
    }

    fn unit(&self) -> I {
        I::one()
    }

    fn add(&self, left: &I, right: &I) -> I {
        *left + *right
    }

    fn subtract(&self, left: &I, right: &I) -> I {
        *left - *right
    }

    fn multiply(&self, left: &I, right: &I) -> I {
        *left * *right
    }

    /// Truncating division.
    ///
    /// # Panics
    ///
    /// When `right` is zero.
    fn divide(&self, left: &I, right: &I) -> I {
        *left / *right
    }

    /// The reciprocal, truncated toward zero.
    ///
    /// Saturates at the extreme values of the type for zero, like a float-to-integer cast.
    fn inverse(&self, value: &I) -> I {
        self.from_f64(1f64 / self.to_f64(value))
    }

    fn negate(&self, value: &I) -> I {
        -*value
    }

    fn to_f64(&self, value: &I) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    /// Truncate toward zero, saturating at the bounds of the type and mapping NaN to zero.
    fn from_f64(&self, value: f64) -> I {
        if value.is_nan() {
            I::zero()
        } else {
            <I as NumCast>::from(value.trunc()).unwrap_or_else(|| {
                if value > 0f64 { I::max_value() } else { I::min_value() }
            })
        }
    }

    fn compare(&self, left: &I, right: &I) -> Ordering {
        left.cmp(right)
    }
}

#[cfg(test)]
mod test {
    use crate::data::number_types::integer::IntegerOperations;
    use crate::data::number_types::traits::OperationSet;

    #[test]
    fn truncation() {
        let ops = IntegerOperations::<i64>::new();
        assert_eq!(ops.divide(&7, &2), 3);
        assert_eq!(ops.divide(&-7, &2), -3);
        assert_eq!(ops.inverse(&1), 1);
        assert_eq!(ops.inverse(&-1), -1);
        assert_eq!(ops.inverse(&3), 0);
        assert_eq!(ops.from_f64(2.9), 2);
        assert_eq!(ops.from_f64(-2.9), -2);
    }

    #[test]
    fn saturation() {
        let ops = IntegerOperations::<i32>::new();
        assert_eq!(ops.inverse(&0), i32::MAX);
        assert_eq!(ops.from_f64(-1e20), i32::MIN);
        assert_eq!(ops.from_f64(f64::NAN), 0);
    }

    #[test]
    fn helpers() {
        let ops = IntegerOperations::<i32>::new();
        assert_eq!(ops.sum(&[1, 2, 3]), 6);
        assert_eq!(*ops.min(&4, &2), 2);
        assert_eq!(*ops.max(&4, &2), 4);
        assert!(ops.is_negative(&-3));
        assert!(ops.is_unit(&1));
    }
}
