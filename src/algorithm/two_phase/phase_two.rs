//! # Phase two: optimizing
//!
//! Starting from a basic feasible solution, improve the objective until no improving column is
//! left.
use log::{debug, trace};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c <= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Basic feasible tableau, optimal after this call if the problem is bounded.
/// * `iteration_limit`: Maximum number of pivots, unlimited if `None`.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
///
/// # Errors
///
/// `IllegalState` when the iteration limit is exceeded.
pub(crate) fn primal<O, PR>(
    tableau: &mut Tableau<O>,
    iteration_limit: Option<usize>,
) -> Result<OptimizationResult<O>>
where
    O: OperationSet,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut iterations = 0;
    let result = loop {
        debug_assert!(tableau.is_basic_feasible());

        match rule.select_primal_pivot_column(tableau) {
            Some(column) => match tableau.select_pivot_row(column) {
                Some(row) => {
                    if iteration_limit.is_some_and(|limit| iterations >= limit) {
                        return Err(Error::IllegalState("Max iterations exceeded".to_string()));
                    }
                    tableau.pivot(row, column)?;
                    iterations += 1;
                    trace!("Objective value {:?} after {iterations} pivots", tableau.value());
                },
                None => break OptimizationResult::Unbounded,
            },
            None => match tableau.basic_solution() {
                Some(solution) => break OptimizationResult::FiniteOptimum(solution),
                None => return Err(Error::IllegalState("Optimal tableau lost its basis".to_string())),
            },
        }
    };

    debug!("Primal simplex finished after {iterations} pivots");
    Ok(result)
}

#[cfg(test)]
mod test {
    use crate::algorithm::OptimizationResult;
    use crate::algorithm::two_phase::phase_two::primal;
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescent};
    use crate::data::linear_algebra::vector::Vector;
    use crate::data::number_types::rational::{rational, RationalOperations};
    use crate::error::Error;
    use crate::tests::problem_2;

    fn vector(values: &[i64]) -> Vector<RationalOperations> {
        Vector::new(RationalOperations, values.iter().map(|&v| rational(v, 1)).collect())
    }

    #[test]
    fn first_profitable() {
        let mut tableau = problem_2::create_tableau();
        let result = primal::<_, FirstProfitable>(&mut tableau, None).unwrap();
        assert_eq!(result, OptimizationResult::FiniteOptimum(vector(&[3, 1, 0, 0])));
        assert_eq!(tableau.value(), &rational(5, 1));
    }

    #[test]
    fn steepest_descent() {
        let mut tableau = problem_2::create_tableau();
        let result = primal::<_, SteepestDescent>(&mut tableau, None).unwrap();
        assert_eq!(result, OptimizationResult::FiniteOptimum(vector(&[3, 1, 0, 0])));
    }

    #[test]
    fn iteration_limit() {
        let mut tableau = problem_2::create_tableau();
        let result = primal::<_, FirstProfitable>(&mut tableau, Some(1));
        assert_eq!(result, Err(Error::IllegalState("Max iterations exceeded".to_string())));

        let mut tableau = problem_2::create_tableau();
        assert!(primal::<_, FirstProfitable>(&mut tableau, Some(2)).is_ok());
    }
}
