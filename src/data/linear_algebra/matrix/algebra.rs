//! # Matrix algebra
//!
//! Naive implementations: the product is cubic, the determinant is computed by cofactor expansion
//! (exponential in the size) and the inverse by Gauss-Jordan elimination without any pivoting
//! strategy beyond finding a nonzero entry.
use std::ops::Neg;

use itertools::Itertools;
use log::trace;

use crate::data::linear_algebra::matrix::{Major, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

impl<O: OperationSet> Matrix<O> {
    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.width() == other.width() && self.height() == other.height() {
            Ok(())
        } else {
            Err(Error::dimensions("Sizes don't match", self.shape(), other.shape()))
        }
    }

    fn combine(&self, other: &Self, f: impl Fn(&O, &O::Element, &O::Element) -> O::Element) -> Result<Self> {
        self.check_same_shape(other)?;

        Ok(Self::from_fn(self.operations.clone(), self.height(), self.width(), |row, column| {
            f(&self.operations, self.entry(row, column), other.entry(row, column))
        }))
    }

    /// Entry-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, O::add)
    }

    /// Entry-wise difference.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, O::subtract)
    }

    /// Multiply every entry with `value`.
    pub fn scalar(&self, value: &O::Element) -> Self {
        self.map_vectors(|vector| vector.scalar(value))
    }

    /// Additive inverse of every entry.
    pub fn negate(&self) -> Self {
        self.map_vectors(Vector::negate)
    }

    /// Matrix product `self * other`.
    ///
    /// The result is column major, each entry being the inner product of a row of this matrix
    /// with a column of `other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the width of this matrix isn't the height of `other`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.width() != other.height() {
            return Err(Error::dimensions("Sizes are wrong for multiplication", self.shape(), other.shape()));
        }

        let rows = self.rows();
        let columns = other.columns()
            .iter()
            .map(|column| {
                let elements = rows.iter()
                    .map(|row| row.dot(column))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Vector::new(self.operations.clone(), elements))
            })
            .collect::<Result<Vec<_>>>()?;

        // Without columns, a column major matrix loses its height
        if columns.is_empty() {
            return Ok(Self::from_fn(self.operations.clone(), self.height(), 0, |_, _| self.operations.zero()));
        }
        Ok(Self::from_vectors_unchecked(self.operations.clone(), columns, Major::Column))
    }

    /// Product with a vector, treated as a matrix with a single column.
    ///
    /// # Return value
    ///
    /// The single column of the product.
    pub fn multiply_vector(&self, vector: &Vector<O>) -> Result<Vector<O>> {
        let product = self.multiply(&vector.to_matrix())?;
        if product.width() == 0 {
            Ok(Vector::new(self.operations.clone(), Vec::new()))
        } else {
            product.column(0)
        }
    }

    /// Repeated multiplication with itself.
    ///
    /// # Arguments
    ///
    /// * `exponent`: Nonnegative number of factors. Zero gives the identity.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` for a negative exponent, `DimensionMismatch` for a non square matrix.
    pub fn power(&self, exponent: i64) -> Result<Self> {
        if exponent < 0 {
            return Err(Error::IllegalArgument(format!("Exponent must be nonnegative, got {exponent}")));
        }
        self.check_square()?;

        let mut result = Self::identity(self.operations.clone(), self.width());
        for _ in 0..exponent {
            result = result.multiply(self)?;
        }

        Ok(result)
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Note
    ///
    /// The running time is exponential in the size of the matrix. Only use this for small
    /// matrices.
    pub fn determinant(&self) -> Result<O::Element> {
        self.check_square()?;

        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> O::Element {
        debug_assert!(self.is_square());

        let ops = &self.operations;
        match self.width() {
            0 => ops.unit(),
            1 => self.entry(0, 0).clone(),
            2 => ops.subtract(
                &ops.multiply(self.entry(0, 0), self.entry(1, 1)),
                &ops.multiply(self.entry(0, 1), self.entry(1, 0)),
            ),
            n => (0..n).fold(ops.zero(), |total, column| {
                let term = ops.multiply(self.entry(0, column), &self.first_row_minor(column).cofactor_expansion());
                if column % 2 == 0 {
                    ops.add(&total, &term)
                } else {
                    ops.subtract(&total, &term)
                }
            }),
        }
    }

    /// The matrix without its first row and without the given column.
    fn first_row_minor(&self, column: usize) -> Self {
        Self::from_fn(self.operations.clone(), self.height() - 1, self.width() - 1, |i, j| {
            let original_column = if j < column { j } else { j + 1 };
            self.entry(i + 1, original_column).clone()
        })
    }

    /// Inverse by Gauss-Jordan elimination on the matrix with the identity glued to its right.
    ///
    /// # Return value
    ///
    /// `None` if the matrix is singular.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the matrix is not square, `IllegalArgument` when it is smaller
    /// than `2 x 2`.
    pub fn inverse(&self) -> Result<Option<Self>> {
        self.check_square()?;
        let n = self.width();
        if n < 2 {
            return Err(Error::IllegalArgument(format!("Matrix must have size at least 2, got {}", self.shape())));
        }

        let mut rows = self.glue_right(&Self::identity(self.operations.clone(), n))?.rows();
        let ops = &self.operations;
        for pivot in 0..n {
            if !swap_to_non_zero(&mut rows, pivot) {
                trace!("No nonzero pivot in column {pivot}, matrix is singular");
                return Ok(None);
            }

            let factor = ops.inverse(&rows[pivot][pivot]);
            rows[pivot].scalar_modify(&factor);
            let pivot_row = rows[pivot].clone();
            for (i, row) in rows.iter_mut().enumerate() {
                if i != pivot && !ops.is_zero(&row[pivot]) {
                    let multiple = pivot_row.scalar(&row[pivot]);
                    row.subtract_modify(&multiple)?;
                }
            }
        }

        let inverse = rows.iter()
            .map(|row| row.slice(n, 2 * n - 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(Self::from_vectors_unchecked(self.operations.clone(), inverse, Major::Row)))
    }

    /// Smallest positive `n` such that this matrix to the power `n` is the identity.
    ///
    /// # Errors
    ///
    /// `IllegalState` when no such `n` is found within `max_iterations` multiplications.
    pub fn order(&self, max_iterations: usize) -> Result<usize> {
        self.check_square()?;

        let mut power = self.clone();
        for n in 1..=max_iterations {
            if power.is_identity() {
                return Ok(n);
            }
            power = power.multiply(self)?;
        }

        Err(Error::IllegalState(format!("Max iterations exceeded ({max_iterations})")))
    }

    /// Whether this matrix is square with exactly unit on the diagonal and zero elsewhere.
    pub fn is_identity(&self) -> bool {
        let ops = &self.operations;
        self.is_square() && (0..self.height()).cartesian_product(0..self.width())
            .all(|(row, column)| {
                let entry = self.entry(row, column);
                if row == column { ops.is_unit(entry) } else { ops.is_zero(entry) }
            })
    }
}

/// Make sure that row `pivot` has a nonzero entry in column `pivot` by swapping with a row below.
///
/// # Return value
///
/// Whether a nonzero entry was found.
fn swap_to_non_zero<O: OperationSet>(rows: &mut [Vector<O>], pivot: usize) -> bool {
    let is_non_zero = |row: &Vector<O>| !row.operations().is_zero(&row[pivot]);
    match rows[pivot..].iter().position(is_non_zero) {
        Some(offset) => {
            rows.swap(pivot, pivot + offset);
            true
        },
        None => false,
    }
}

impl<O: OperationSet> Neg for &Matrix<O> {
    type Output = Matrix<O>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
