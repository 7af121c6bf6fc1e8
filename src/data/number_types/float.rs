//! # Floating point numbers
//!
//! Fast, but inexact. Algorithms relying on exact zero tests, such as the Hungarian method and the
//! simplex method, can misbehave due to accumulating rounding errors.
use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::{Float, NumCast};

use crate::data::number_types::traits::OperationSet;

/// Values closer to zero than this are considered zero by `is_approximately_zero`.
pub const EPSILON: f64 = 1e-9;

/// Operations on a primitive float type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FloatOperations<F> {
    phantom: PhantomData<F>,
}

impl<F> FloatOperations<F> {
    /// Create a new instance.
    pub fn new() -> Self {
        Self { phantom: PhantomData }
    }
}

/// Operations on `f64`.
pub type DoubleOperations = FloatOperations<f64>;

impl<F: Float + Debug> OperationSet for FloatOperations<F> {
    type Element = F;

    fn zero(&self) -> F {
        F::zero()
    }

    fn unit(&self) -> F {
        F::one()
    }

    fn add(&self, left: &F, right: &F) -> F {
        *left + *right
    }

    fn subtract(&self, left: &F, right: &F) -> F {
        *left - *right
    }

    fn multiply(&self, left: &F, right: &F) -> F {
        *left * *right
    }

    fn divide(&self, left: &F, right: &F) -> F {
        *left / *right
    }

    fn inverse(&self, value: &F) -> F {
        value.recip()
    }

    fn negate(&self, value: &F) -> F {
        -*value
    }

    fn to_f64(&self, value: &F) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    fn from_f64(&self, value: f64) -> F {
        <F as NumCast>::from(value).unwrap_or_else(F::nan)
    }

    fn compare(&self, left: &F, right: &F) -> Ordering {
        left.partial_cmp(right).unwrap_or(Ordering::Equal)
    }

    fn is_negligible(&self, value: &F) -> bool {
        self.is_zero(value) || is_approximately_zero(self.to_f64(value))
    }
}

/// Whether a double is within `EPSILON` of zero.
pub fn is_approximately_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::data::number_types::float::{is_approximately_zero, DoubleOperations, FloatOperations};
    use crate::data::number_types::traits::OperationSet;

    #[test]
    fn arithmetic() {
        let ops = DoubleOperations::new();
        assert_eq!(ops.add(&1.5, &2.0), 3.5);
        assert_eq!(ops.subtract(&1.5, &2.0), -0.5);
        assert_eq!(ops.multiply(&1.5, &2.0), 3.0);
        assert_eq!(ops.divide(&3.0, &2.0), 1.5);
        assert_eq!(ops.inverse(&4.0), 0.25);
        assert_eq!(ops.negate(&4.0), -4.0);
        assert_eq!(ops.compare(&1.0, &2.0), Ordering::Less);
    }

    #[test]
    fn negative_zero_is_zero() {
        let ops = DoubleOperations::new();
        assert!(ops.is_zero(&-0.0));
        assert!(!ops.is_negative(&-0.0));
    }

    #[test]
    fn single_precision() {
        let ops = FloatOperations::<f32>::new();
        assert_eq!(ops.from_f64(0.5), 0.5f32);
        assert_eq!(ops.to_f64(&0.25f32), 0.25);
    }

    #[test]
    fn approximately_zero() {
        assert!(is_approximately_zero(1e-12));
        assert!(!is_approximately_zero(1e-3));

        let ops = DoubleOperations::new();
        assert!(ops.is_negligible(&1e-12));
        assert!(ops.is_negligible(&-1e-12));
        assert!(!ops.is_zero(&1e-12));
        assert!(!ops.is_negligible(&1e-3));
    }
}
