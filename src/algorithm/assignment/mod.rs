//! # Assignment
//!
//! Assigning workers to jobs at minimum total cost with the Hungarian algorithm.
use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::assignment::cover::{find_minimum_cover, Cover, Zeros};
use crate::algorithm::assignment::result::select_assignment;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

pub(crate) mod cover;
pub(crate) mod result;

/// Assigns every worker to a distinct job.
///
/// Entry `(i, j)` of the cost matrix is the cost of worker `i` doing job `j`. The algorithm can be
/// executed once, after which the assignment and its cost can be queried.
#[derive(Debug)]
pub struct HungarianAlgorithm<O: OperationSet, W, J> {
    cost_matrix: Matrix<O>,
    workers: Vec<W>,
    jobs: Vec<J>,

    assignment: Option<Vec<(usize, usize)>>,
    cost: Option<O::Element>,
}

impl<O, W, J> HungarianAlgorithm<O, W, J>
where
    O: OperationSet,
    W: Clone + Eq + Hash,
    J: Clone,
{
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `cost_matrix`: Square matrix, rows belong to workers and columns to jobs.
    /// * `workers`: One label per row.
    /// * `jobs`: One label per column.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrix is not square or the number of labels doesn't match,
    /// `IllegalArgument` if the matrix is empty.
    pub fn new(cost_matrix: Matrix<O>, workers: Vec<W>, jobs: Vec<J>) -> Result<Self> {
        cost_matrix.check_square()?;
        if cost_matrix.width() == 0 {
            return Err(Error::IllegalArgument("Size of matrix must be greater than 0".to_string()));
        }
        if workers.len() != cost_matrix.height() {
            return Err(Error::dimensions("Number of workers doesn't match the matrix", workers.len(), cost_matrix.height()));
        }
        if jobs.len() != cost_matrix.width() {
            return Err(Error::dimensions("Number of jobs doesn't match the matrix", jobs.len(), cost_matrix.width()));
        }

        Ok(Self {
            cost_matrix,
            workers,
            jobs,
            assignment: None,
            cost: None,
        })
    }

    /// Assignment with the lowest total cost.
    ///
    /// # Errors
    ///
    /// `IllegalState` if the algorithm was executed before.
    pub fn minimize(&mut self) -> Result<HashMap<W, J>> {
        let working = self.cost_matrix.clone();
        self.execute(working)
    }

    /// Assignment with the highest total cost.
    ///
    /// Each entry `x` is replaced by `max - x`, after which the lowest total cost is found. The
    /// reported cost is that of the original entries.
    ///
    /// # Errors
    ///
    /// `IllegalState` if the algorithm was executed before.
    pub fn maximize(&mut self) -> Result<HashMap<W, J>> {
        let operations = self.cost_matrix.operations().clone();
        let maximum = self.cost_matrix.major_vectors().iter()
            .flat_map(|vector| vector.iter())
            .reduce(|left, right| operations.max(left, right))
            .cloned()
            .unwrap_or_else(|| operations.zero());

        let working = self.cost_matrix.map_elements(|value| operations.subtract(&maximum, value));
        self.execute(working)
    }

    /// Total cost of the assignment in the original matrix.
    ///
    /// # Errors
    ///
    /// `IllegalState` if the algorithm wasn't executed yet.
    pub fn cost(&self) -> Result<&O::Element> {
        self.cost.as_ref().ok_or_else(not_executed)
    }

    /// Assigned `(row, column)` pairs, sorted by row.
    ///
    /// # Errors
    ///
    /// `IllegalState` if the algorithm wasn't executed yet.
    pub fn assignment(&self) -> Result<&[(usize, usize)]> {
        self.assignment.as_deref().ok_or_else(not_executed)
    }

    fn execute(&mut self, mut working: Matrix<O>) -> Result<HashMap<W, J>> {
        if self.assignment.is_some() {
            return Err(Error::IllegalState("Algorithm has already been executed".to_string()));
        }

        let size = working.width();
        subtract_minima(&mut working)?;

        let mut iterations = 0;
        loop {
            let cover = find_minimum_cover(&zeros(&working));
            trace!("Cover of {} lines after {iterations} iterations", cover.size());
            if cover.size() == size {
                break;
            }

            adjust_uncovered(&mut working, &cover)?;
            iterations += 1;
        }
        debug!("Reduced a {size}x{size} cost matrix in {iterations} iterations");

        let assignment = select_assignment(&zeros(&working))?;
        let operations = self.cost_matrix.operations();
        let cost = assignment.iter()
            .fold(operations.zero(), |total, &(row, column)| {
                operations.add(&total, self.cost_matrix.entry(row, column))
            });

        let result = assignment.iter()
            .map(|&(row, column)| (self.workers[row].clone(), self.jobs[column].clone()))
            .collect();
        self.assignment = Some(assignment);
        self.cost = Some(cost);

        Ok(result)
    }
}

fn not_executed() -> Error {
    Error::IllegalState("Algorithm must be executed first".to_string())
}

fn zeros<O: OperationSet>(matrix: &Matrix<O>) -> Zeros {
    let operations = matrix.operations();
    Zeros::new(
        (0..matrix.height())
            .map(|row| (0..matrix.width()).map(|column| operations.is_negligible(matrix.entry(row, column))).collect())
            .collect(),
    )
}

/// Subtract the smallest entry of each row from that row, and then do the same for each column.
fn subtract_minima<O: OperationSet>(matrix: &mut Matrix<O>) -> Result<()> {
    let operations = matrix.operations().clone();

    for index in 0..matrix.height() {
        let row = matrix.row(index)?;
        if let Some(minimum) = minimum(&operations, row.iter()) {
            matrix.set_row(index, &row.map(|value| operations.subtract(value, &minimum)))?;
        }
    }
    for index in 0..matrix.width() {
        let column = matrix.column(index)?;
        if let Some(minimum) = minimum(&operations, column.iter()) {
            matrix.set_column(index, &column.map(|value| operations.subtract(value, &minimum)))?;
        }
    }

    Ok(())
}

/// Shift the smallest uncovered entry from the uncovered entries to the doubly covered ones.
fn adjust_uncovered<O: OperationSet>(matrix: &mut Matrix<O>, cover: &Cover) -> Result<()> {
    let operations = matrix.operations().clone();
    let view: &Matrix<O> = matrix;
    let size = view.width();
    let uncovered = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .filter(|&(row, column)| !cover.is_covered(row, column))
        .map(|(row, column)| view.entry(row, column));
    let minimum = minimum(&operations, uncovered)
        .ok_or_else(|| Error::IllegalState("Cover leaves no entry uncovered".to_string()))?;
    trace!("Adjusting by {minimum:?}");

    *matrix = matrix.map_elements_indexed(|row, column, value| {
        match (cover.rows[row], cover.columns[column]) {
            (true, true) => operations.add(value, &minimum),
            (false, false) => operations.subtract(value, &minimum),
            _ => value.clone(),
        }
    });

    Ok(())
}

fn minimum<'a, O: OperationSet + 'a>(
    operations: &O,
    values: impl Iterator<Item = &'a O::Element>,
) -> Option<O::Element> {
    values.reduce(|left, right| operations.min(left, right)).cloned()
}

impl<O: OperationSet> Matrix<O> {
    /// Assign workers to jobs at minimum cost, treating this matrix as the cost matrix.
    ///
    /// See `HungarianAlgorithm`.
    pub fn assign_jobs<W, J>(&self, workers: Vec<W>, jobs: Vec<J>) -> Result<HashMap<W, J>>
    where
        W: Clone + Eq + Hash,
        J: Clone,
    {
        HungarianAlgorithm::new(self.clone(), workers, jobs)?.minimize()
    }
}
