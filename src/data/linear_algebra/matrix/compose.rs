//! # Extracting and concatenating matrices
use crate::data::linear_algebra::check_sizes;
use crate::data::linear_algebra::matrix::{Major, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

impl<O: OperationSet> Matrix<O> {
    /// Copy of a rectangular region.
    ///
    /// All bounds are validated before anything is copied.
    ///
    /// # Arguments
    ///
    /// * `row`: Index of the top row of the region.
    /// * `column`: Index of the left column of the region.
    /// * `width`: Number of columns in the region.
    /// * `height`: Number of rows in the region.
    pub fn sub_matrix(&self, row: usize, column: usize, width: usize, height: usize) -> Result<Self> {
        check_region(row, height, self.height())?;
        check_region(column, width, self.width())?;

        Ok(Self::from_fn(self.operations.clone(), height, width, |i, j| {
            self.entry(row + i, column + j).clone()
        }).with_major(self.major))
    }

    /// This matrix with `other` to its right, as a row major matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the heights differ.
    pub fn glue_right(&self, other: &Self) -> Result<Self> {
        if self.height() != other.height() {
            return Err(Error::dimensions("Heights don't match", self.height(), other.height()));
        }

        let rows = self.rows().iter().zip(other.rows())
            .map(|(left, right)| left.append(&right))
            .collect();
        Ok(Self::from_vectors_unchecked(self.operations.clone(), rows, Major::Row))
    }

    /// This matrix with `other` to its left, as a row major matrix.
    pub fn glue_left(&self, other: &Self) -> Result<Self> {
        other.glue_right(self)
    }

    /// This matrix with `other` below it, as a column major matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the widths differ.
    pub fn glue_bottom(&self, other: &Self) -> Result<Self> {
        if self.width() != other.width() {
            return Err(Error::dimensions("Widths don't match", self.width(), other.width()));
        }

        let columns = self.columns().iter().zip(other.columns())
            .map(|(top, bottom)| top.append(&bottom))
            .collect();
        Ok(Self::from_vectors_unchecked(self.operations.clone(), columns, Major::Column))
    }

    /// This matrix with `other` above it, as a column major matrix.
    pub fn glue_top(&self, other: &Self) -> Result<Self> {
        other.glue_bottom(self)
    }

    /// Apply a function to every entry.
    pub fn map_elements(&self, mut f: impl FnMut(&O::Element) -> O::Element) -> Self {
        self.map_vectors(|vector| vector.map(&mut f))
    }

    /// Apply a function to every entry, given its row and column.
    pub fn map_elements_indexed(&self, mut f: impl FnMut(usize, usize, &O::Element) -> O::Element) -> Self {
        Self::from_fn(self.operations.clone(), self.height(), self.width(), |row, column| {
            f(row, column, self.entry(row, column))
        }).with_major(self.major)
    }

    /// Apply a function to every stored vector, keeping the major.
    ///
    /// # Note
    ///
    /// The function should not change the size of the vectors.
    pub fn map_vectors(&self, f: impl FnMut(&Vector<O>) -> Vector<O>) -> Self {
        let vectors = self.vectors.iter().map(f).collect::<Vec<_>>();
        Self::from_vectors_unchecked(self.operations.clone(), vectors, self.major)
    }

    /// Apply a function to every stored vector, given its index, keeping the major.
    pub fn map_vectors_indexed(&self, mut f: impl FnMut(usize, &Vector<O>) -> Vector<O>) -> Self {
        let vectors = self.vectors.iter().enumerate().map(|(i, vector)| f(i, vector)).collect::<Vec<_>>();
        Self::from_vectors_unchecked(self.operations.clone(), vectors, self.major)
    }
}

/// Validate that `start..start + length` lies within `0..bound`.
fn check_region(start: usize, length: usize, bound: usize) -> Result<()> {
    if start > bound || (start == bound && length > 0) {
        return Err(Error::IndexOutOfBounds { index: start, len: bound });
    }
    if length > bound - start {
        return Err(Error::IndexOutOfBounds { index: start.saturating_add(length - 1), len: bound });
    }

    Ok(())
}
