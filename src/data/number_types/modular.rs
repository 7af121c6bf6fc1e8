//! # Modular integers
//!
//! Integers modulo a fixed modulus, represented by their least nonnegative residue. For a prime
//! modulus this is a finite field, in which matrix inversion is exact.
use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::data::number_types::traits::OperationSet;

/// Operations on residues `0..modulus`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModularOperations {
    modulus: i64,
}

impl ModularOperations {
    /// Create operations modulo `modulus`.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` when the modulus is not greater than 1.
    pub fn new(modulus: i64) -> Result<Self> {
        if modulus > 1 {
            Ok(Self { modulus })
        } else {
            Err(Error::IllegalArgument(format!("Modulus must be greater than 1, got {modulus}")))
        }
    }

    /// The modulus.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Reduce any integer to its residue.
    pub fn element(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus)
    }

    fn reduce(&self, value: i128) -> i64 {
        // The residue is smaller than the modulus, so it fits
        value.rem_euclid(self.modulus as i128) as i64
    }
}

impl OperationSet for ModularOperations {
    type Element = i64;

    fn zero(&self) -> i64 {
        0
    }

    fn unit(&self) -> i64 {
        1
    }

    fn add(&self, left: &i64, right: &i64) -> i64 {
        self.reduce(*left as i128 + *right as i128)
    }

    fn subtract(&self, left: &i64, right: &i64) -> i64 {
        self.reduce(*left as i128 - *right as i128)
    }

    fn multiply(&self, left: &i64, right: &i64) -> i64 {
        self.reduce(*left as i128 * *right as i128)
    }

    /// # Panics
    ///
    /// When `right` has no inverse.
    fn divide(&self, left: &i64, right: &i64) -> i64 {
        self.multiply(left, &self.inverse(right))
    }

    /// Inverse through the extended Euclidean algorithm.
    ///
    /// # Panics
    ///
    /// When `value` shares a factor with the modulus, zero in particular.
    fn inverse(&self, value: &i64) -> i64 {
        let (gcd, x) = extended_euclid(self.element(*value), self.modulus);
        assert_eq!(gcd, 1, "{value} is not invertible modulo {}", self.modulus);

        self.element(x)
    }

    fn negate(&self, value: &i64) -> i64 {
        self.reduce(-(*value as i128))
    }

    fn to_f64(&self, value: &i64) -> f64 {
        *value as f64
    }

    fn from_f64(&self, value: f64) -> i64 {
        self.element(value as i64)
    }

    fn compare(&self, left: &i64, right: &i64) -> Ordering {
        left.cmp(right)
    }
}

/// Greatest common divisor `g` of `a` and `b` together with `x` such that `ax = g (mod b)`.
fn extended_euclid(a: i64, b: i64) -> (i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1, 0);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    (old_r, old_s)
}
