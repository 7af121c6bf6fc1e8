//! # Strings
//!
//! A degenerate operation set. Concatenation acts as addition and the empty string as both
//! identities, so that generic vector code can be used to label things. Subtraction, division,
//! inversion and negation are not inverses of anything; don't expect algorithms to make sense.
use std::cmp::Ordering;

use crate::data::number_types::traits::OperationSet;

/// Operations on `String`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StringOperations;

impl OperationSet for StringOperations {
    type Element = String;

    fn zero(&self) -> String {
        String::new()
    }

    fn unit(&self) -> String {
        String::new()
    }

    /// Concatenation.
    fn add(&self, left: &String, right: &String) -> String {
        format!("{left}{right}")
    }

    /// Strip `right` from the end of `left`, if it is there.
    fn subtract(&self, left: &String, right: &String) -> String {
        left.strip_suffix(right.as_str()).unwrap_or(left).to_string()
    }

    /// # Panics
    ///
    /// Always, strings can't be multiplied.
    fn multiply(&self, _left: &String, _right: &String) -> String {
        unimplemented!("strings can't be multiplied")
    }

    /// Remove all occurrences of `right` from `left`.
    fn divide(&self, left: &String, right: &String) -> String {
        if right.is_empty() {
            left.clone()
        } else {
            left.replace(right.as_str(), "")
        }
    }

    /// Reversal.
    fn inverse(&self, value: &String) -> String {
        value.chars().rev().collect()
    }

    /// Reversal.
    fn negate(&self, value: &String) -> String {
        value.chars().rev().collect()
    }

    /// Parse the string, NaN when it isn't a number.
    fn to_f64(&self, value: &String) -> f64 {
        value.trim().parse().unwrap_or(f64::NAN)
    }

    fn from_f64(&self, value: f64) -> String {
        value.to_string()
    }

    fn compare(&self, left: &String, right: &String) -> Ordering {
        left.cmp(right)
    }
}
