//! # Tableaus
//!
//! A dense simplex tableau of a maximization problem `max c x + d` subject to `A x = b, x >= 0`.
//!
//! The first row holds the negated relative costs and the current objective value `[-c | d]`,
//! the other rows hold the constraints `[A | b]`. Rows are numbered including the objective row,
//! so the constraints are rows `1` up to and including `nr_rows()`.
use std::fmt;

use index_utils::remove_indices;
use log::trace;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{phase_one, phase_two};
use crate::algorithm::two_phase::phase_one::RankedFeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::data::linear_algebra::matrix::{Major, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Simplex tableau, stored as a list of rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<O: OperationSet> {
    operations: O,
    /// Row 0 is `[-c | d]`, row `i` for `i > 0` is `[A_(i - 1) | b_(i - 1)]`.
    rows: Vec<Vector<O>>,
}

impl<O: OperationSet> Tableau<O> {
    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `a`: Constraint matrix.
    /// * `b`: Constraint values, one for each row of `a`.
    /// * `c`: Cost vector, one for each column of `a`.
    /// * `d`: Constant objective offset.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the sizes of `b` or `c` don't match the shape of `a`.
    pub fn new(operations: O, a: &Matrix<O>, b: &Vector<O>, c: &Vector<O>, d: O::Element) -> Result<Self> {
        if b.size() != a.height() {
            return Err(Error::dimensions("Constraint values don't match the rows", b.size(), a.height()));
        }
        if c.size() != a.width() {
            return Err(Error::dimensions("Costs don't match the columns", c.size(), a.width()));
        }

        let mut rows = Vec::with_capacity(1 + a.height());
        rows.push(c.negate().push(d));
        rows.extend(a.rows().into_iter().zip(b.iter()).map(|(row, value)| row.push(value.clone())));

        Ok(Self::from_rows(operations, rows))
    }

    /// Wrap rows that already have the tableau layout.
    pub(crate) fn from_rows(operations: O, rows: Vec<Vector<O>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.size() == rows[0].size() && row.size() > 0));

        Self { operations, rows }
    }

    pub(crate) fn rows(&self) -> &[Vector<O>] {
        &self.rows
    }

    /// The operation set of this tableau.
    pub fn operations(&self) -> &O {
        &self.operations
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of variables.
    pub fn nr_columns(&self) -> usize {
        self.rows[0].size() - 1
    }

    /// Entry in tableau coordinates, the objective row and constraint value column included.
    pub fn get(&self, row: usize, column: usize) -> Result<&O::Element> {
        let row_vector = self.rows.get(row)
            .ok_or(Error::IndexOutOfBounds { index: row, len: self.rows.len() })?;
        row_vector.get(column)
    }

    /// The whole tableau as a row major matrix.
    pub fn matrix(&self) -> Matrix<O> {
        Matrix::from_vectors_unchecked(self.operations.clone(), self.rows.clone(), Major::Row)
    }

    /// The constraint matrix `A`.
    pub fn a(&self) -> Matrix<O> {
        let rows = self.rows[1..].iter()
            .map(|row| Vector::new(self.operations.clone(), row.elements()[..self.nr_columns()].to_vec()))
            .collect();
        Matrix::from_vectors_unchecked(self.operations.clone(), rows, Major::Row)
    }

    /// The constraint values `b`.
    pub fn b(&self) -> Vector<O> {
        Vector::from_fn(self.operations.clone(), self.nr_rows(), |i| self.constraint_value(i + 1).clone())
    }

    /// The relative costs `c`.
    pub fn c(&self) -> Vector<O> {
        Vector::from_fn(self.operations.clone(), self.nr_columns(), |j| self.relative_cost(j))
    }

    /// Current value of the objective function.
    pub fn value(&self) -> &O::Element {
        &self.rows[0][self.nr_columns()]
    }

    /// Relative cost of a column, positive if increasing the variable increases the objective.
    pub fn relative_cost(&self, column: usize) -> O::Element {
        self.operations.negate(&self.rows[0][column])
    }

    /// Constraint value of a tableau row, `row > 0`.
    pub(crate) fn constraint_value(&self, row: usize) -> &O::Element {
        debug_assert!(row > 0);

        &self.rows[row][self.nr_columns()]
    }

    /// Make `column` a unit column with its unit in `row`.
    ///
    /// Row `row` is divided by the pivot element, after which multiples of it are subtracted from
    /// all other rows, the objective row included, to eliminate the column.
    ///
    /// # Arguments
    ///
    /// * `row`: Constraint row, at least 1 and at most `nr_rows()`.
    /// * `column`: Variable column, less than `nr_columns()`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` for coordinates outside the constraint part, `IllegalArgument` when the
    /// pivot element is zero.
    pub fn pivot(&mut self, row: usize, column: usize) -> Result<()> {
        if row == 0 {
            return Err(Error::IllegalArgument("Can't pivot on the objective row".to_string()));
        }
        if row > self.nr_rows() {
            return Err(Error::IndexOutOfBounds { index: row, len: self.rows.len() });
        }
        if column >= self.nr_columns() {
            return Err(Error::IndexOutOfBounds { index: column, len: self.nr_columns() });
        }
        let pivot = &self.rows[row][column];
        if self.operations.is_zero(pivot) {
            return Err(Error::IllegalArgument(format!("Pivot element at ({row}, {column}) is zero")));
        }
        trace!("Pivot on row {row}, column {column}");

        let inverse = self.operations.inverse(pivot);
        self.rows[row].scalar_modify(&inverse);
        self.rows[row].elements_mut()[column] = self.operations.unit();

        let pivot_row = self.rows[row].clone();
        for (index, other) in self.rows.iter_mut().enumerate() {
            if index == row || self.operations.is_zero(&other[column]) {
                continue;
            }

            let factor = other[column].clone();
            other.subtract_modify(&pivot_row.scalar(&factor))?;
            other.elements_mut()[column] = self.operations.zero();
        }

        Ok(())
    }

    /// Leaving row for an entering column, by the minimum ratio test.
    ///
    /// Only rows with a strictly positive entry in the column are considered. Among rows with the
    /// same ratio, the first one is chosen.
    ///
    /// # Return value
    ///
    /// A tableau row index, `None` if the column has no positive entry.
    pub fn select_pivot_row(&self, column: usize) -> Option<usize> {
        (1..=self.nr_rows())
            .filter(|&row| self.operations.is_positive(&self.rows[row][column]))
            .map(|row| (row, self.operations.divide(self.constraint_value(row), &self.rows[row][column])))
            .min_by(|(_, left), (_, right)| self.operations.compare(left, right))
            .map(|(row, _)| row)
    }

    /// The first column with a positive relative cost that has a leaving row.
    ///
    /// Improving columns without a positive entry are skipped rather than reported. The solver
    /// doesn't go through here, it selects columns with a `PivotRule` so that such a column can
    /// signal unboundedness.
    ///
    /// # Return value
    ///
    /// Tableau row and column to pivot on, `None` if no such pair exists.
    pub fn next_pivot(&self) -> Option<(usize, usize)> {
        (0..self.nr_columns())
            .filter(|&column| self.operations.is_positive(&self.relative_cost(column)))
            .find_map(|column| self.select_pivot_row(column).map(|row| (row, column)))
    }

    /// Whether all constraint values are nonnegative.
    pub fn is_feasible(&self) -> bool {
        (1..=self.nr_rows()).all(|row| !self.operations.is_negative(self.constraint_value(row)))
    }

    /// Whether no relative cost is positive.
    pub fn is_dual_feasible(&self) -> bool {
        (0..self.nr_columns()).all(|column| !self.operations.is_positive(&self.relative_cost(column)))
    }

    /// Whether `column` is the unit vector with its unit in tableau row `row`, ignoring the costs.
    pub(crate) fn is_unit_column(&self, column: usize, row: usize) -> bool {
        (1..=self.nr_rows()).all(|other| {
            let value = &self.rows[other][column];
            if other == row {
                self.operations.is_unit(value)
            } else {
                self.operations.is_zero(value)
            }
        })
    }

    /// For every constraint row, the first unit column with that row's unit and zero cost.
    ///
    /// # Return value
    ///
    /// Column indices, one per constraint row in order, `None` if some row has no such column.
    pub fn basis(&self) -> Option<Vec<usize>> {
        (1..=self.nr_rows())
            .map(|row| {
                (0..self.nr_columns()).find(|&column| {
                    self.operations.is_zero(&self.rows[0][column]) && self.is_unit_column(column, row)
                })
            })
            .collect()
    }

    /// Whether every row has a basic column.
    pub fn is_basic(&self) -> bool {
        self.basis().is_some()
    }

    #[allow(missing_docs)]
    pub fn is_basic_feasible(&self) -> bool {
        self.is_basic() && self.is_feasible()
    }

    /// Whether the current basic solution is optimal.
    pub fn is_optimal(&self) -> bool {
        self.is_basic_feasible() && self.is_dual_feasible()
    }

    /// The solution in which the basic variables take the constraint values and all other
    /// variables are zero.
    ///
    /// `None` if the tableau is not basic.
    pub fn basic_solution(&self) -> Option<Vector<O>> {
        let basis = self.basis()?;

        let mut solution = Vector::null_vector(self.operations.clone(), self.nr_columns());
        for (index, column) in basis.into_iter().enumerate() {
            solution.elements_mut()[column] = self.constraint_value(index + 1).clone();
        }
        Some(solution)
    }

    /// Pivot until the current basic solution is optimal.
    ///
    /// # Errors
    ///
    /// `IllegalState` if the tableau is not basic feasible, `Unbounded` if the objective can
    /// increase without bound.
    pub fn make_optimal(&mut self) -> Result<()> {
        if !self.is_basic_feasible() {
            return Err(Error::IllegalState("Cannot make optimal when not basic or feasible".to_string()));
        }

        match phase_two::primal::<_, FirstProfitable>(self, None)? {
            OptimizationResult::FiniteOptimum(_) => Ok(()),
            OptimizationResult::Unbounded => Err(Error::Unbounded),
            OptimizationResult::Infeasible => Err(Error::Infeasible),
        }
    }

    /// An equivalent tableau in basic feasible form.
    ///
    /// Redundant constraints are removed along the way.
    ///
    /// # Errors
    ///
    /// `Infeasible` when the constraints have no nonnegative solution.
    pub fn compute_basic_feasible(self) -> Result<Self> {
        match phase_one::compute_basic_feasible::<_, FirstProfitable>(self, None)? {
            RankedFeasibilityResult::Feasible { tableau, .. } => Ok(tableau),
            RankedFeasibilityResult::Infeasible => Err(Error::Infeasible),
        }
    }

    /// Delete constraint rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated tableau row indices, all at least 1.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.iter().all(|&row| row > 0 && row < self.rows.len()));
        debug_assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));

        remove_indices(&mut self.rows, rows);
    }
}

impl<O: OperationSet> fmt::Display for Tableau<O> where O::Element: fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix())
    }
}
