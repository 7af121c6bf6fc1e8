//! # Matrices
//!
//! A matrix is stored as a list of equally sized vectors, which are either its rows or its
//! columns. The `Major` tag says which. Transposing only flips the tag: the same vectors are
//! reinterpreted. Every accessor branches on the tag.
//!
//! Algebraic operations live in `algebra`, extraction and concatenation in `compose` and the
//! incremental row-by-row construction in `builder`.
use std::fmt;
use std::fmt::Display;
use std::ops::Not;

use itertools::repeat_n;

use crate::data::linear_algebra::check_sizes;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{check_index, Error, Result};

pub mod algebra;
pub mod builder;
pub mod compose;

/// Whether the stored vectors of a matrix are its rows or its columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Major {
    /// Vectors are rows.
    Row,
    /// Vectors are columns.
    Column,
}

impl Not for Major {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Major::Row => Major::Column,
            Major::Column => Major::Row,
        }
    }
}

/// Dense matrix over an operation set.
///
/// Equality is by dimensions and entries, regardless of the major.
#[derive(Clone, Debug)]
pub struct Matrix<O: OperationSet> {
    operations: O,
    vectors: Vec<Vector<O>>,
    major: Major,
}

impl<O: OperationSet> Matrix<O> {
    /// Create a matrix from its major vectors.
    ///
    /// # Arguments
    ///
    /// * `operations`: Operation set of the matrix.
    /// * `vectors`: Rows or columns, depending on `major`.
    /// * `major`: Orientation of `vectors`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the vectors don't all have the same size.
    pub fn new(operations: O, vectors: Vec<Vector<O>>, major: Major) -> Result<Self> {
        if let Some(first) = vectors.first() {
            for vector in &vectors {
                check_sizes(first.size(), vector.size())?;
            }
        }

        Ok(Self::from_vectors_unchecked(operations, vectors, major))
    }

    pub(crate) fn from_vectors_unchecked(operations: O, vectors: Vec<Vector<O>>, major: Major) -> Self {
        debug_assert!(vectors.iter().map(Vector::size).all(|size| Some(size) == vectors.first().map(Vector::size)));

        Self { operations, vectors, major }
    }

    /// Create a row major matrix from elements listed row by row.
    ///
    /// # Arguments
    ///
    /// * `elements`: All entries, first the entries of the first row, then of the second, etc.
    /// * `width`: Length of each row.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the number of elements isn't a multiple of `width`.
    pub fn from_elements(operations: O, elements: Vec<O::Element>, width: usize) -> Result<Self> {
        if width == 0 {
            return if elements.is_empty() {
                Ok(Self::empty(operations))
            } else {
                Err(Error::dimensions("Width 0 can't hold elements", elements.len(), 0))
            };
        }
        if elements.len() % width != 0 {
            return Err(Error::DimensionMismatch {
                message: format!("{} elements can't be split into rows of width {width}", elements.len()),
            });
        }

        let rows = elements.chunks(width)
            .map(|chunk| Vector::new(operations.clone(), chunk.to_vec()))
            .collect();
        Ok(Self::from_vectors_unchecked(operations, rows, Major::Row))
    }

    /// Create a row major matrix by computing each entry from its coordinates.
    pub fn from_fn(
        operations: O,
        height: usize,
        width: usize,
        mut populator: impl FnMut(usize, usize) -> O::Element,
    ) -> Self {
        let rows = (0..height)
            .map(|row| Vector::from_fn(operations.clone(), width, |column| populator(row, column)))
            .collect();
        Self::from_vectors_unchecked(operations, rows, Major::Row)
    }

    /// The `0 x 0` matrix.
    pub fn empty(operations: O) -> Self {
        Self::from_vectors_unchecked(operations, Vec::new(), Major::Row)
    }

    /// A matrix of zeros.
    pub fn zeros(operations: O, height: usize, width: usize) -> Self {
        let zero = operations.zero();
        Self::from_fn(operations, height, width, |_, _| zero.clone())
    }

    /// Square identity matrix.
    pub fn identity(operations: O, size: usize) -> Self {
        let (zero, unit) = (operations.zero(), operations.unit());
        Self::from_fn(operations, size, size, |row, column| {
            if row == column { unit.clone() } else { zero.clone() }
        })
    }

    /// The operation set of this matrix.
    pub fn operations(&self) -> &O {
        &self.operations
    }

    /// Whether the stored vectors are rows or columns.
    pub fn major(&self) -> Major {
        self.major
    }

    /// The stored rows or columns, depending on the major.
    pub fn major_vectors(&self) -> &[Vector<O>] {
        &self.vectors
    }

    fn minor_size(&self) -> usize {
        self.vectors.first().map_or(0, Vector::size)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        match self.major {
            Major::Row => self.minor_size(),
            Major::Column => self.vectors.len(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        match self.major {
            Major::Row => self.vectors.len(),
            Major::Column => self.minor_size(),
        }
    }

    /// Whether the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the width equals the height.
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub(crate) fn shape(&self) -> String {
        format!("{}x{}", self.height(), self.width())
    }

    pub(crate) fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                message: format!("Matrix is not square, got {}", self.shape()),
            })
        }
    }

    /// Entry without bound checks beyond those of the underlying `Vec`.
    pub(crate) fn entry(&self, row: usize, column: usize) -> &O::Element {
        match self.major {
            Major::Row => &self.vectors[row][column],
            Major::Column => &self.vectors[column][row],
        }
    }

    fn entry_mut(&mut self, row: usize, column: usize) -> &mut O::Element {
        let (major, minor) = match self.major {
            Major::Row => (row, column),
            Major::Column => (column, row),
        };
        &mut self.vectors[major].elements_mut()[minor]
    }

    /// Entry at the given coordinates.
    pub fn get(&self, row: usize, column: usize) -> Result<&O::Element> {
        check_index(row, self.height())?;
        check_index(column, self.width())?;

        Ok(self.entry(row, column))
    }

    /// Replace the entry at the given coordinates.
    pub fn set(&mut self, row: usize, column: usize, value: O::Element) -> Result<()> {
        check_index(row, self.height())?;
        check_index(column, self.width())?;

        *self.entry_mut(row, column) = value;
        Ok(())
    }

    fn minor_vector(&self, index: usize) -> Vector<O> {
        Vector::new(
            self.operations.clone(),
            self.vectors.iter().map(|vector| vector[index].clone()).collect(),
        )
    }

    /// Copy of row `index`.
    pub fn row(&self, index: usize) -> Result<Vector<O>> {
        check_index(index, self.height())?;

        Ok(match self.major {
            Major::Row => self.vectors[index].clone(),
            Major::Column => self.minor_vector(index),
        })
    }

    /// Copy of column `index`.
    pub fn column(&self, index: usize) -> Result<Vector<O>> {
        check_index(index, self.width())?;

        Ok(match self.major {
            Major::Row => self.minor_vector(index),
            Major::Column => self.vectors[index].clone(),
        })
    }

    /// Copies of all rows, top to bottom.
    pub fn rows(&self) -> Vec<Vector<O>> {
        match self.major {
            Major::Row => self.vectors.clone(),
            Major::Column => (0..self.height()).map(|i| self.minor_vector(i)).collect(),
        }
    }

    /// Copies of all columns, left to right.
    pub fn columns(&self) -> Vec<Vector<O>> {
        match self.major {
            Major::Row => (0..self.width()).map(|j| self.minor_vector(j)).collect(),
            Major::Column => self.vectors.clone(),
        }
    }

    /// Replace row `index` with `values`.
    pub fn set_row(&mut self, index: usize, values: &Vector<O>) -> Result<()> {
        check_index(index, self.height())?;
        check_sizes(self.width(), values.size())?;

        for (column, value) in values.iter().enumerate() {
            *self.entry_mut(index, column) = value.clone();
        }
        Ok(())
    }

    /// Replace column `index` with `values`.
    pub fn set_column(&mut self, index: usize, values: &Vector<O>) -> Result<()> {
        check_index(index, self.width())?;
        check_sizes(self.height(), values.size())?;

        for (row, value) in values.iter().enumerate() {
            *self.entry_mut(row, index) = value.clone();
        }
        Ok(())
    }

    /// Exchange two rows in place.
    pub fn swap_row_modify(&mut self, i: usize, j: usize) -> Result<&mut Self> {
        check_index(i, self.height())?;
        check_index(j, self.height())?;

        match self.major {
            Major::Row => self.vectors.swap(i, j),
            Major::Column => for vector in &mut self.vectors {
                vector.swap(i, j)?;
            },
        }
        Ok(self)
    }

    /// Exchange two columns in place.
    pub fn swap_column_modify(&mut self, i: usize, j: usize) -> Result<&mut Self> {
        check_index(i, self.width())?;
        check_index(j, self.width())?;

        match self.major {
            Major::Row => for vector in &mut self.vectors {
                vector.swap(i, j)?;
            },
            Major::Column => self.vectors.swap(i, j),
        }
        Ok(self)
    }

    /// Copy with two rows exchanged.
    pub fn swap_row(&self, i: usize, j: usize) -> Result<Self> {
        let mut result = self.clone();
        result.swap_row_modify(i, j)?;
        Ok(result)
    }

    /// Copy with two columns exchanged.
    pub fn swap_column(&self, i: usize, j: usize) -> Result<Self> {
        let mut result = self.clone();
        result.swap_column_modify(i, j)?;
        Ok(result)
    }

    /// Multiply row `index` with `value` in place.
    pub fn scalar_row_modify(&mut self, index: usize, value: &O::Element) -> Result<&mut Self> {
        check_index(index, self.height())?;

        for column in 0..self.width() {
            let product = self.operations.multiply(self.entry(index, column), value);
            *self.entry_mut(index, column) = product;
        }
        Ok(self)
    }

    /// Multiply column `index` with `value` in place.
    pub fn scalar_column_modify(&mut self, index: usize, value: &O::Element) -> Result<&mut Self> {
        check_index(index, self.width())?;

        for row in 0..self.height() {
            let product = self.operations.multiply(self.entry(row, index), value);
            *self.entry_mut(row, index) = product;
        }
        Ok(self)
    }

    /// Copy with row `index` multiplied by `value`.
    pub fn scalar_row(&self, index: usize, value: &O::Element) -> Result<Self> {
        let mut result = self.clone();
        result.scalar_row_modify(index, value)?;
        Ok(result)
    }

    /// Copy with column `index` multiplied by `value`.
    pub fn scalar_column(&self, index: usize, value: &O::Element) -> Result<Self> {
        let mut result = self.clone();
        result.scalar_column_modify(index, value)?;
        Ok(result)
    }

    /// The transpose, sharing no storage with this matrix.
    ///
    /// Only the major is flipped; the vectors are copied as they are.
    pub fn transpose(&self) -> Self {
        self.clone().into_transpose()
    }

    /// The transpose, reusing the storage of this matrix.
    pub fn into_transpose(self) -> Self {
        Self { major: !self.major, ..self }
    }

    /// Copy stored with the other major, having the same rows and columns.
    pub fn with_major(&self, major: Major) -> Self {
        if major == self.major {
            self.clone()
        } else {
            let vectors = match major {
                Major::Row => self.rows(),
                Major::Column => self.columns(),
            };
            Self::from_vectors_unchecked(self.operations.clone(), vectors, major)
        }
    }
}

impl<O: OperationSet> PartialEq for Matrix<O> {
    fn eq(&self, other: &Self) -> bool {
        self.height() == other.height() && self.width() == other.width() &&
            (0..self.height()).all(|row| {
                (0..self.width()).all(|column| self.entry(row, column) == other.entry(row, column))
            })
    }
}

impl<O: OperationSet> Display for Matrix<O> where O::Element: Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts = (0..self.height())
            .map(|row| (0..self.width()).map(|column| self.entry(row, column).to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let widths = (0..self.width())
            .map(|column| texts.iter().map(|row| row[column].chars().count()).max().unwrap_or(0))
            .collect::<Vec<_>>();

        for row in &texts {
            for (column, text) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let padding = widths[column] - text.chars().count();
                f.write_str(&repeat_n(" ", padding).collect::<String>())?;
                f.write_str(text)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{Major, Matrix};
    use crate::data::linear_algebra::vector::Vector;
    use crate::data::number_types::integer::IntegerOperations;
    use crate::error::Error;

    type Ops = IntegerOperations<i64>;

    fn matrix(rows: &[&[i64]]) -> Matrix<Ops> {
        let width = rows.first().map_or(0, |row| row.len());
        Matrix::from_elements(Ops::new(), rows.concat(), width).unwrap()
    }

    fn vector(values: &[i64]) -> Vector<Ops> {
        Vector::new(Ops::new(), values.to_vec())
    }

    #[test]
    fn construction_variants_agree() {
        let from_elements = matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        let from_rows = Matrix::new(Ops::new(), vec![vector(&[1, 2, 3]), vector(&[4, 5, 6])], Major::Row).unwrap();
        let from_columns = Matrix::new(
            Ops::new(),
            vec![vector(&[1, 4]), vector(&[2, 5]), vector(&[3, 6])],
            Major::Column,
        ).unwrap();
        let from_fn = Matrix::from_fn(Ops::new(), 2, 3, |row, column| (3 * row + column + 1) as i64);

        assert_eq!(from_elements, from_rows);
        assert_eq!(from_elements, from_columns);
        assert_eq!(from_elements, from_fn);
        assert_eq!(from_columns.height(), 2);
        assert_eq!(from_columns.width(), 3);
    }

    #[test]
    fn unequal_vectors() {
        let result = Matrix::new(Ops::new(), vec![vector(&[1, 2]), vector(&[1])], Major::Row);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
        assert!(Matrix::from_elements(Ops::new(), vec![1, 2, 3], 2).is_err());
    }

    #[test]
    fn empty() {
        let empty = Matrix::empty(Ops::new());
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 0);
        assert!(empty.is_square());
        assert_eq!(Matrix::from_elements(Ops::new(), vec![], 0).unwrap(), empty);
    }

    #[test]
    fn access_branches_on_major() {
        let rows = matrix(&[&[1, 2], &[3, 4], &[5, 6]]);
        let columns = rows.with_major(Major::Column);
        assert_eq!(columns.major(), Major::Column);
        for m in [&rows, &columns] {
            assert_eq!(m.get(2, 1), Ok(&6));
            assert_eq!(m.row(1).unwrap(), vector(&[3, 4]));
            assert_eq!(m.column(0).unwrap(), vector(&[1, 3, 5]));
            assert_eq!(m.rows().len(), 3);
            assert_eq!(m.columns().len(), 2);
            assert_eq!(m.get(3, 0), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
            assert!(m.column(2).is_err());
        }
    }

    #[test]
    fn transpose_flips_major() {
        let m = matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        let t = m.transpose();
        assert_eq!(t.major(), Major::Column);
        assert_eq!(t.height(), 3);
        assert_eq!(t.width(), 2);
        assert_eq!(t.get(2, 1), Ok(&6));
        assert_eq!(t.transpose(), m);
        assert_eq!(t.major_vectors(), m.major_vectors());
    }

    #[test]
    fn setters() {
        for major in [Major::Row, Major::Column] {
            let mut m = matrix(&[&[1, 2], &[3, 4]]).with_major(major);
            m.set(0, 1, 9).unwrap();
            assert_eq!(m, matrix(&[&[1, 9], &[3, 4]]));
            m.set_row(1, &vector(&[7, 8])).unwrap();
            assert_eq!(m, matrix(&[&[1, 9], &[7, 8]]));
            m.set_column(0, &vector(&[0, 0])).unwrap();
            assert_eq!(m, matrix(&[&[0, 9], &[0, 8]]));
            assert!(m.set_row(0, &vector(&[1])).is_err());
            assert!(m.set(2, 0, 1).is_err());
        }
    }

    #[test]
    fn swaps_and_scalars() {
        for major in [Major::Row, Major::Column] {
            let m = matrix(&[&[1, 2], &[3, 4]]).with_major(major);
            assert_eq!(m.swap_row(0, 1).unwrap(), matrix(&[&[3, 4], &[1, 2]]));
            assert_eq!(m.swap_column(0, 1).unwrap(), matrix(&[&[2, 1], &[4, 3]]));
            assert_eq!(m.scalar_row(1, &2).unwrap(), matrix(&[&[1, 2], &[6, 8]]));
            assert_eq!(m.scalar_column(0, &-1).unwrap(), matrix(&[&[-1, 2], &[-3, 4]]));
            assert!(m.swap_row(0, 2).is_err());
        }
    }

    #[test]
    fn display_pads_columns() {
        let m = matrix(&[&[1, -20], &[300, 4]]);
        assert_eq!(m.to_string(), "  1 -20\n300   4\n");
    }
}
