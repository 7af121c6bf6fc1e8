//! # Building a matrix row by row
use crate::data::linear_algebra::matrix::{Major, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Accumulates rows of equal length into a row major matrix.
///
/// ```
/// # use utensils::data::linear_algebra::matrix::builder::MatrixBuilder;
/// # use utensils::data::number_types::integer::IntegerOperations;
/// let matrix = MatrixBuilder::new(IntegerOperations::<i32>::new())
///     .row(vec![1, 2])?
///     .row(vec![3, 4])?
///     .build();
/// assert_eq!(matrix.height(), 2);
/// # Ok::<(), utensils::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MatrixBuilder<O: OperationSet> {
    operations: O,
    rows: Vec<Vec<O::Element>>,
}

impl<O: OperationSet> MatrixBuilder<O> {
    /// Start without any rows.
    pub fn new(operations: O) -> Self {
        Self { operations, rows: Vec::new() }
    }

    /// Add a row below the previous ones.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the row doesn't have the length of the rows added before.
    pub fn row(mut self, elements: Vec<O::Element>) -> Result<Self> {
        if let Some(first) = self.rows.first() {
            if first.len() != elements.len() {
                return Err(Error::DimensionMismatch {
                    message: format!("Wrong row size, got {}, expected {}", elements.len(), first.len()),
                });
            }
        }

        self.rows.push(elements);
        Ok(self)
    }

    /// Number of rows added so far.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// The matrix of all rows added.
    pub fn build(self) -> Matrix<O> {
        let operations = self.operations;
        let rows = self.rows.into_iter()
            .map(|row| Vector::new(operations.clone(), row))
            .collect();
        Matrix::from_vectors_unchecked(operations, rows, Major::Row)
    }
}

impl<O: OperationSet> Matrix<O> {
    /// Start building a matrix row by row.
    pub fn builder(operations: O) -> MatrixBuilder<O> {
        MatrixBuilder::new(operations)
    }
}
