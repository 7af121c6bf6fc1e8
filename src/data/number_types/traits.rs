//! # Traits
//!
//! Generic numeric code in this crate doesn't rely on operator overloading of the element type.
//! Instead, all arithmetic goes through an `OperationSet`: a value bundling the additive and
//! multiplicative identities with the primitive operations on elements.
//!
//! The contracts are those of a field, but they are not verified. An operation set that violates
//! them (see `StringOperations`) produces silently meaningless results in the algorithms.
use std::cmp::Ordering;
use std::fmt::Debug;

/// Arithmetic primitives over an element type.
///
/// Operation sets are cheap to clone: they are either zero sized or hold a small parameter, such
/// as a modulus. Every vector and matrix carries its own copy.
pub trait OperationSet: Clone + Debug + PartialEq {
    /// Type of the values operated on.
    type Element: Clone + Debug + PartialEq;

    /// Additive identity.
    fn zero(&self) -> Self::Element;
    /// Multiplicative identity.
    fn unit(&self) -> Self::Element;

    /// First operation.
    fn add(&self, left: &Self::Element, right: &Self::Element) -> Self::Element;
    /// Inverse of the first operation.
    fn subtract(&self, left: &Self::Element, right: &Self::Element) -> Self::Element;
    /// Second operation.
    fn multiply(&self, left: &Self::Element, right: &Self::Element) -> Self::Element;
    /// Inverse of the second operation.
    ///
    /// Division by zero is delegated to the element type.
    fn divide(&self, left: &Self::Element, right: &Self::Element) -> Self::Element;
    /// Multiplicative inverse.
    fn inverse(&self, value: &Self::Element) -> Self::Element;
    /// Additive inverse.
    fn negate(&self, value: &Self::Element) -> Self::Element;

    /// Lossy conversion to a double precision float.
    fn to_f64(&self, value: &Self::Element) -> f64;
    /// Lossy conversion from a double precision float.
    fn from_f64(&self, value: f64) -> Self::Element;

    /// Total order used by the algorithms to select minima and signs.
    fn compare(&self, left: &Self::Element, right: &Self::Element) -> Ordering;

    /// Whether a value equals the additive identity exactly.
    fn is_zero(&self, value: &Self::Element) -> bool {
        *value == self.zero()
    }

    /// Whether a value is close enough to zero to be treated as one by the algorithms.
    ///
    /// Exact for every element type that doesn't round.
    fn is_negligible(&self, value: &Self::Element) -> bool {
        self.is_zero(value)
    }

    /// Whether a value equals the multiplicative identity exactly.
    fn is_unit(&self, value: &Self::Element) -> bool {
        *value == self.unit()
    }

    /// Whether a value is strictly larger than zero.
    fn is_positive(&self, value: &Self::Element) -> bool {
        self.compare(value, &self.zero()) == Ordering::Greater
    }

    /// Whether a value is strictly smaller than zero.
    fn is_negative(&self, value: &Self::Element) -> bool {
        self.compare(value, &self.zero()) == Ordering::Less
    }

    /// The smallest of two values, the left one on ties.
    fn min<'a>(&self, left: &'a Self::Element, right: &'a Self::Element) -> &'a Self::Element {
        match self.compare(right, left) {
            Ordering::Less => right,
            _ => left,
        }
    }

    /// The largest of two values, the left one on ties.
    fn max<'a>(&self, left: &'a Self::Element, right: &'a Self::Element) -> &'a Self::Element {
        match self.compare(right, left) {
            Ordering::Greater => right,
            _ => left,
        }
    }

    /// Sum of a sequence of values, zero if it is empty.
    fn sum<'a, I>(&self, values: I) -> Self::Element
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        values.into_iter().fold(self.zero(), |total, value| self.add(&total, value))
    }
}
