//! # Vectors
//!
//! A dense, fixed size sequence of elements. All arithmetic goes through the operation set that
//! the vector carries.
//!
//! Operations come in two flavours. The plain ones (`add`, `scalar`, ...) leave the receiver
//! untouched and allocate a new vector. The `_modify` ones change the receiver in place and return
//! it, such that calls can be chained.
use std::fmt;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Neg};
use std::slice::Iter;

use itertools::Itertools;

use crate::data::linear_algebra::check_sizes;
use crate::data::linear_algebra::matrix::{Major, Matrix};
use crate::data::number_types::float::is_approximately_zero;
use crate::data::number_types::traits::OperationSet;
use crate::error::{check_index, Error, Result};

/// Dense vector over an operation set.
#[derive(Clone, Debug)]
pub struct Vector<O: OperationSet> {
    operations: O,
    elements: Vec<O::Element>,
}

impl<O: OperationSet> Vector<O> {
    /// Create a vector from its elements.
    pub fn new(operations: O, elements: Vec<O::Element>) -> Self {
        Self { operations, elements }
    }

    /// Create a vector by computing each element from its index.
    ///
    /// # Arguments
    ///
    /// * `operations`: Operation set of the new vector.
    /// * `size`: Number of elements.
    /// * `populator`: Called once for every index, in order.
    pub fn from_fn(operations: O, size: usize, populator: impl FnMut(usize) -> O::Element) -> Self {
        Self { elements: (0..size).map(populator).collect(), operations }
    }

    /// A vector of zeros.
    pub fn null_vector(operations: O, size: usize) -> Self {
        let zero = operations.zero();
        Self { elements: vec![zero; size], operations }
    }

    /// The operation set of this vector.
    pub fn operations(&self) -> &O {
        &self.operations
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Whether this vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<&O::Element> {
        check_index(index, self.size())?;

        Ok(&self.elements[index])
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: usize, value: O::Element) -> Result<()> {
        check_index(index, self.size())?;

        self.elements[index] = value;
        Ok(())
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, O::Element> {
        self.elements.iter()
    }

    /// The elements as a slice.
    pub fn elements(&self) -> &[O::Element] {
        &self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [O::Element] {
        &mut self.elements
    }

    /// Take the elements out of the vector.
    pub fn into_elements(self) -> Vec<O::Element> {
        self.elements
    }

    /// Apply a function to every element, keeping the operation set.
    pub fn map(&self, mut f: impl FnMut(&O::Element) -> O::Element) -> Self {
        Self::new(self.operations.clone(), self.elements.iter().map(|e| f(e)).collect())
    }

    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(&O, &O::Element, &O::Element) -> O::Element,
    ) -> Result<Self> {
        check_sizes(self.size(), other.size())?;

        let elements = self.elements.iter().zip_eq(&other.elements)
            .map(|(left, right)| f(&self.operations, left, right))
            .collect();
        Ok(Self::new(self.operations.clone(), elements))
    }

    fn zip_with_modify(
        &mut self,
        other: &Self,
        f: impl Fn(&O, &O::Element, &O::Element) -> O::Element,
    ) -> Result<&mut Self> {
        check_sizes(self.size(), other.size())?;

        for (element, right) in self.elements.iter_mut().zip_eq(&other.elements) {
            *element = f(&self.operations, element, right);
        }
        Ok(self)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, O::add)
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, O::subtract)
    }

    /// Element-wise product, also known as the Hadamard product.
    pub fn element_wise_product(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, O::multiply)
    }

    /// Element-wise quotient.
    pub fn element_wise_division(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, O::divide)
    }

    /// Inner product.
    pub fn dot(&self, other: &Self) -> Result<O::Element> {
        check_sizes(self.size(), other.size())?;

        let ops = &self.operations;
        Ok(self.elements.iter().zip_eq(&other.elements)
            .fold(ops.zero(), |total, (left, right)| ops.add(&total, &ops.multiply(left, right))))
    }

    /// Cross product of two vectors of size 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.size() != 3 {
            return Err(Error::dimensions("This vector doesn't have size 3", self.size(), 3));
        }
        if other.size() != 3 {
            return Err(Error::dimensions("Other vector doesn't have size 3", other.size(), 3));
        }

        let ops = &self.operations;
        let (a, b) = (&self.elements, &other.elements);
        let component = |i: usize, j: usize| {
            ops.subtract(&ops.multiply(&a[i], &b[j]), &ops.multiply(&a[j], &b[i]))
        };
        Ok(Self::new(ops.clone(), vec![component(1, 2), component(2, 0), component(0, 1)]))
    }

    /// Multiply every element with `value`.
    pub fn scalar(&self, value: &O::Element) -> Self {
        self.map(|element| self.operations.multiply(element, value))
    }

    /// Additive inverse of every element.
    pub fn negate(&self) -> Self {
        self.map(|element| self.operations.negate(element))
    }

    /// Euclidean length, computed in double precision.
    pub fn length(&self) -> f64 {
        let ops = &self.operations;
        let squared = self.elements.iter()
            .fold(ops.zero(), |total, element| ops.add(&total, &ops.multiply(element, element)));
        ops.to_f64(&squared).sqrt()
    }

    /// A vector in the same direction with length one.
    ///
    /// # Return value
    ///
    /// A null vector of the same size if this vector has length zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if is_approximately_zero(length) {
            Self::null_vector(self.operations.clone(), self.size())
        } else {
            self.scalar(&self.operations.from_f64(1f64 / length))
        }
    }

    /// Elements `start` up to and including `end`.
    ///
    /// An empty vector results when `start == end + 1`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        check_index(end, self.size())?;
        if start > end + 1 {
            return Err(Error::IllegalArgument(format!("Slice start {start} is after end {end}")));
        }

        Ok(Self::new(self.operations.clone(), self.elements[start..=end].to_vec()))
    }

    /// A new vector with the elements of `other` after those of this vector.
    pub fn append(&self, other: &Self) -> Self {
        let elements = self.elements.iter().chain(&other.elements).cloned().collect();
        Self::new(self.operations.clone(), elements)
    }

    /// A new vector with `value` added at the end.
    pub fn push(&self, value: O::Element) -> Self {
        let mut elements = self.elements.clone();
        elements.push(value);
        Self::new(self.operations.clone(), elements)
    }

    /// Sum over `others` of each vector scaled by its inner product with this vector.
    ///
    /// # Note
    ///
    /// This is not divided by the squared length of each of the `others`, so it is only the
    /// orthogonal projection when all of them have length one.
    pub fn perpendicular_projection_to(&self, others: &[Self]) -> Result<Self> {
        if others.is_empty() {
            return Err(Error::IllegalArgument("Must specify at least one vector.".to_string()));
        }

        let mut sum = Self::null_vector(self.operations.clone(), self.size());
        for other in others {
            let product = self.dot(other)?;
            sum.add_modify(&other.scalar(&product))?;
        }

        Ok(sum)
    }

    /// Whether the inner product with `other` is zero.
    pub fn is_perpendicular_to(&self, other: &Self) -> Result<bool> {
        Ok(self.operations.is_zero(&self.dot(other)?))
    }

    /// Whether all elements are zero.
    pub fn is_null_vector(&self) -> bool {
        self.elements.iter().all(|element| self.operations.is_zero(element))
    }

    /// Angle in the xy-plane measured from the x-axis, in radians.
    pub fn azimuth(&self) -> Result<f64> {
        let [x, y, _] = self.three_dimensional()?;
        Ok(y.atan2(x))
    }

    /// Polar angle measured from the z-axis, in radians.
    pub fn inclination(&self) -> Result<f64> {
        let [x, y, z] = self.three_dimensional()?;
        Ok(std::f64::consts::FRAC_PI_2 - z.atan2(x.hypot(y)))
    }

    fn three_dimensional(&self) -> Result<[f64; 3]> {
        if self.size() != 3 {
            return Err(Error::dimensions("Only applicable to size 3", self.size(), 3));
        }

        let ops = &self.operations;
        Ok([ops.to_f64(&self.elements[0]), ops.to_f64(&self.elements[1]), ops.to_f64(&self.elements[2])])
    }

    /// A matrix with this vector as its only column.
    pub fn to_matrix(&self) -> Matrix<O> {
        Matrix::from_vectors_unchecked(self.operations.clone(), vec![self.clone()], Major::Column)
    }

    /// Add `other` to this vector in place.
    pub fn add_modify(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_modify(other, O::add)
    }

    /// Subtract `other` from this vector in place.
    pub fn subtract_modify(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_modify(other, O::subtract)
    }

    /// Multiply element-wise with `other` in place.
    pub fn element_wise_product_modify(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_modify(other, O::multiply)
    }

    /// Divide element-wise by `other` in place.
    pub fn element_wise_division_modify(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_modify(other, O::divide)
    }

    /// Multiply every element with `value` in place.
    pub fn scalar_modify(&mut self, value: &O::Element) -> &mut Self {
        for element in &mut self.elements {
            *element = self.operations.multiply(element, value);
        }
        self
    }

    /// Negate every element in place.
    pub fn negate_modify(&mut self) -> &mut Self {
        for element in &mut self.elements {
            *element = self.operations.negate(element);
        }
        self
    }

    /// Scale to length one in place, unless the length is zero.
    pub fn normalize_modify(&mut self) -> &mut Self {
        let length = self.length();
        if !is_approximately_zero(length) {
            let factor = self.operations.from_f64(1f64 / length);
            self.scalar_modify(&factor);
        }
        self
    }

    /// Exchange the elements at two indices.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(i, self.size())?;
        check_index(j, self.size())?;

        self.elements.swap(i, j);
        Ok(())
    }
}

impl<O: OperationSet> PartialEq for Vector<O> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<O: OperationSet> Eq for Vector<O> where O::Element: Eq {}

impl<O: OperationSet> Hash for Vector<O> where O::Element: Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<O: OperationSet> Index<usize> for Vector<O> {
    type Output = O::Element;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.size());

        &self.elements[index]
    }
}

impl<O: OperationSet> Neg for &Vector<O> {
    type Output = Vector<O>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'a, O: OperationSet> IntoIterator for &'a Vector<O> {
    type Item = &'a O::Element;
    type IntoIter = Iter<'a, O::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<O: OperationSet> Display for Vector<O> where O::Element: Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.elements.iter().join(","))
    }
}
