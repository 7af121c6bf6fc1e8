//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two phase simplex method on
//! a dense tableau. The program is brought into standard form, a basic feasible solution is
//! computed in the first phase and that solution is improved to an optimal one in the second.
use std::marker::PhantomData;

use log::debug;

use crate::algorithm::{LPSolver, OptimizationResult};
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::standard_form::StandardForm;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::program::LinearProgram;
use crate::data::linear_program::solution::LPSolution;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

pub mod phase_one;
pub mod phase_two;
pub mod standard_form;
pub mod strategy;
pub mod tableau;

/// Solves a linear program with the two phase simplex method.
///
/// The pivot rule is chosen through the type parameter:
///
/// ```
/// # use utensils::algorithm::two_phase::SimplexSolver;
/// # use utensils::algorithm::two_phase::strategy::pivot_rule::SteepestDescent;
/// # use utensils::data::linear_algebra::vector::Vector;
/// # use utensils::data::linear_program::function::LinearFunction;
/// # use utensils::data::linear_program::program::LinearProgram;
/// # use utensils::data::linear_program::elements::Variable;
/// # use utensils::data::number_types::rational::{rational, RationalOperations};
/// let x = Variable::new(1);
/// let goal = LinearFunction::variable(Vector::new(RationalOperations, vec![rational(1, 1)]), x)?;
/// let solver = SimplexSolver::new(LinearProgram::minimize(RationalOperations, goal))
///     .with_pivot_rule::<SteepestDescent>()
///     .with_iteration_limit(100);
/// assert_eq!(solver.solve()?.value(), &rational(0, 1));
/// # Ok::<(), utensils::error::Error>(())
/// ```
#[derive(Debug)]
pub struct SimplexSolver<O: OperationSet, PR = FirstProfitable> {
    program: LinearProgram<O>,
    /// Maximum number of pivots in each of the two phases.
    iteration_limit: Option<usize>,
    pivot_rule: PhantomData<PR>,
}

impl<O: OperationSet> SimplexSolver<O> {
    /// Solver with the default pivot rule and no iteration limit.
    pub fn new(program: LinearProgram<O>) -> Self {
        Self {
            program,
            iteration_limit: None,
            pivot_rule: PhantomData,
        }
    }
}

impl<O: OperationSet, PR: PivotRule> SimplexSolver<O, PR> {
    /// Use a different pivot rule.
    pub fn with_pivot_rule<R: PivotRule>(self) -> SimplexSolver<O, R> {
        SimplexSolver {
            program: self.program,
            iteration_limit: self.iteration_limit,
            pivot_rule: PhantomData,
        }
    }

    /// Give up with an `IllegalState` error after `limit` pivots in a single phase.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// The program that will be solved.
    pub fn program(&self) -> &LinearProgram<O> {
        &self.program
    }

    /// Compute an optimal solution.
    ///
    /// # Return value
    ///
    /// The optimal value, in the direction the program was created with, and the values of the
    /// variables of the program. Slack variables are not included.
    ///
    /// # Errors
    ///
    /// `Infeasible` if no solution satisfies all constraints, `Unbounded` if the goal function can
    /// grow without bound, `IllegalState` when the iteration limit is exceeded.
    pub fn solve(self) -> Result<LPSolution<O>> {
        let operations = self.program.operations().clone();
        let standard = StandardForm::from_program(&self.program)?;
        let tableau = Tableau::new(operations.clone(), &standard.a, &standard.b, &standard.c, standard.d)?;

        debug!("Computing a basic feasible solution");
        let mut tableau = match phase_one::compute_basic_feasible::<_, PR>(tableau, self.iteration_limit)? {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                if let Rank::Deficient(rows) = rank {
                    debug!("Constraint rows {rows:?} are redundant");
                }
                tableau
            },
            RankedFeasibilityResult::Infeasible => return Err(Error::Infeasible),
        };

        debug!("Optimizing from a basic feasible solution");
        let solution = match phase_two::primal::<_, PR>(&mut tableau, self.iteration_limit)? {
            OptimizationResult::FiniteOptimum(solution) => solution,
            OptimizationResult::Unbounded => return Err(Error::Unbounded),
            OptimizationResult::Infeasible => return Err(Error::Infeasible),
        };

        let value = if self.program.is_negated() {
            operations.negate(tableau.value())
        } else {
            tableau.value().clone()
        };
        let nr_variables = self.program.nr_variables();
        let vector = Vector::new(operations, solution.into_elements().into_iter().take(nr_variables).collect());

        Ok(LPSolution::new(value, vector, self.program.variables()))
    }
}

impl<O: OperationSet, PR: PivotRule> LPSolver<O> for SimplexSolver<O, PR> {
    fn solve(self) -> Result<LPSolution<O>> {
        SimplexSolver::solve(self)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::LPSolver;
    use crate::algorithm::two_phase::SimplexSolver;
    use crate::algorithm::two_phase::strategy::pivot_rule::SteepestDescent;
    use crate::data::linear_algebra::matrix::Matrix;
    use crate::data::linear_algebra::vector::Vector;
    use crate::data::linear_program::constraint::LinearConstraint;
    use crate::data::linear_program::elements::Variable;
    use crate::data::linear_program::expression::LinearExpression;
    use crate::data::linear_program::function::LinearFunction;
    use crate::data::linear_program::program::LinearProgram;
    use crate::data::number_types::rational::{rational, RationalOperations};
    use crate::error::Error;
    use crate::tests::{problem_1, problem_3};

    fn rationals(values: &[i64]) -> Vector<RationalOperations> {
        Vector::new(RationalOperations, values.iter().map(|&v| rational(v, 1)).collect())
    }

    #[test]
    fn maximize() {
        let (program, x) = problem_1::create_program();
        let solution = SimplexSolver::new(program).solve().unwrap();
        assert_abs_diff_eq!(*solution.value(), 12.0);
        assert_eq!(solution.variable_values(x), Some(problem_1::vector(&[4.0, 0.0])));
        assert_eq!(solution.vector().size(), 2);
    }

    #[test]
    fn maximize_steepest_descent() {
        let (program, _) = problem_1::create_program();
        let solution = SimplexSolver::new(program).with_pivot_rule::<SteepestDescent>().solve().unwrap();
        assert_abs_diff_eq!(*solution.value(), 12.0);
    }

    #[test]
    fn minimize() {
        // min x + y subject to x + 2y >= 4, 3x + y >= 6
        let x = Variable::new(2);
        let goal = LinearFunction::variable(rationals(&[1, 1]), x).unwrap();
        let mut program = LinearProgram::minimize(RationalOperations, goal);
        for (coefficients, bound) in [([1, 2], 4), ([3, 1], 6)] {
            let left = LinearExpression::variable(
                Matrix::from_elements(
                    RationalOperations, coefficients.iter().map(|&v| rational(v, 1)).collect(), 2,
                ).unwrap(),
                x,
            ).unwrap();
            let right = LinearExpression::constant(rationals(&[bound]));
            program.constrain(LinearConstraint::greater_than_equal(left, right).unwrap());
        }

        let solution = SimplexSolver::new(program).solve().unwrap();
        assert_eq!(solution.value(), &rational(14, 5));
        assert_eq!(solution.variable_values(x), Some(Vector::new(RationalOperations, vec![rational(8, 5), rational(6, 5)])));
    }

    #[test]
    fn infeasible() {
        let x = Variable::new(1);
        let goal = LinearFunction::variable(rationals(&[1]), x).unwrap();
        let mut program = LinearProgram::maximize(RationalOperations, goal);
        let identity = LinearExpression::identity(RationalOperations, x);
        program.constrain(LinearConstraint::greater_than_equal(identity.clone(), LinearExpression::constant(rationals(&[1]))).unwrap());
        program.constrain(LinearConstraint::less_than_equal(identity, LinearExpression::constant(rationals(&[0]))).unwrap());

        let result = SimplexSolver::new(program).solve();
        assert_eq!(result, Err(Error::Infeasible));
        assert!(result.unwrap_err().is_illegal_state());
    }

    #[test]
    fn unbounded() {
        let x = Variable::new(2);
        let goal = LinearFunction::variable(rationals(&[1, 0]), x).unwrap();
        let mut program = LinearProgram::maximize(RationalOperations, goal);
        let left = LinearExpression::variable(
            Matrix::from_elements(
                RationalOperations, vec![rational(1, 1), rational(-1, 1)], 2,
            ).unwrap(),
            x,
        ).unwrap();
        program.constrain(LinearConstraint::less_than_equal(left, LinearExpression::constant(rationals(&[1]))).unwrap());

        assert_eq!(SimplexSolver::new(program).solve(), Err(Error::Unbounded));
    }

    #[test]
    fn redundant_equality() {
        let (program, x) = problem_3::create_program();
        let solution = LPSolver::solve(SimplexSolver::new(program)).unwrap();
        assert_eq!(solution.value(), &rational(2, 1));
        assert_eq!(solution.variable_values(x), Some(rationals(&[2, 0])));
    }

    #[test]
    fn iteration_limit() {
        let (program, _) = problem_1::create_program();
        let result = SimplexSolver::new(program).with_iteration_limit(0).solve();
        assert!(matches!(result, Err(Error::IllegalState(_))));
    }

    #[test]
    fn float_and_rational_agree() {
        let (program, _) = problem_1::create_program();
        let float = SimplexSolver::new(program).solve().unwrap();
        let (program, _) = problem_1::create_rational_program();
        let exact = SimplexSolver::new(program).solve().unwrap();
        assert_abs_diff_eq!(*float.value(), 12.0);
        assert_eq!(exact.value(), &rational(12, 1));
        assert_eq!(float.vector().size(), exact.vector().size());
    }
}
