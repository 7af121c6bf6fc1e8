//! # Algorithms
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::solution::LPSolution;
use crate::data::number_types::traits::OperationSet;
use crate::error::Result;

pub mod assignment;
pub mod two_phase;

/// Something that can find an optimal solution of a linear program.
pub trait LPSolver<O: OperationSet> {
    /// Solve the program this solver was created for.
    ///
    /// # Return value
    ///
    /// The optimal value and an optimal solution, or an error explaining why there is none.
    fn solve(self) -> Result<LPSolution<O>>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Debug, PartialEq)]
pub enum OptimizationResult<O: OperationSet> {
    Infeasible,
    FiniteOptimum(Vector<O>),
    Unbounded,
}
