//! # Phase one: finding a basic feasible solution
//!
//! If the tableau doesn't already describe a basic feasible solution, an artificial problem is
//! solved first. It has one artificial variable for every row, forming an identity basis, and
//! maximizes the negated sum of these artificial variables. If some constraint values are
//! negative, one more auxiliary column of `-1`s is added. A single pivot on that column in the row
//! with the most negative value makes the artificial basis feasible.
//!
//! The original problem is feasible if and only if the artificial optimum is zero.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_two::primal;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Compute an equivalent basic feasible tableau.
///
/// # Arguments
///
/// * `tableau`: Any tableau.
/// * `iteration_limit`: Maximum number of pivots of the artificial problem, unlimited if `None`.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a basic feasible tableau with the same objective
/// and without the redundant rows.
pub(crate) fn compute_basic_feasible<O, PR>(
    tableau: Tableau<O>,
    iteration_limit: Option<usize>,
) -> Result<RankedFeasibilityResult<O>>
where
    O: OperationSet,
    PR: PivotRule,
{
    if tableau.is_basic_feasible() {
        debug!("Initial basis is feasible, skipping phase one");
        return Ok(RankedFeasibilityResult::Feasible { rank: Rank::Full, tableau });
    }

    let mut artificial = artificial_tableau(&tableau)?;
    debug!(
        "Phase one with {} rows and {} artificial columns",
        artificial.nr_rows(), artificial.nr_columns() - tableau.nr_columns(),
    );
    match primal::<_, PR>(&mut artificial, iteration_limit)? {
        OptimizationResult::FiniteOptimum(_) => {},
        OptimizationResult::Unbounded | OptimizationResult::Infeasible => {
            return Err(Error::IllegalState("Artificial cost can not be unbounded".to_string()));
        },
    }

    if !artificial.operations().is_zero(artificial.value()) {
        debug!("Artificial optimum {:?} is not zero, problem is infeasible", artificial.value());
        return Ok(RankedFeasibilityResult::Infeasible);
    }

    let rows_to_remove = remove_artificial_basis_variables(&mut artificial, tableau.nr_columns())?;
    let feasible = without_artificial_columns(&artificial, &tableau, &rows_to_remove)?;
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        debug!("Removed {} redundant rows", rows_to_remove.len());
        Rank::Deficient(rows_to_remove.into_iter().map(|row| row - 1).collect())
    };

    Ok(RankedFeasibilityResult::Feasible { rank, tableau: feasible })
}

/// Build the artificial problem in basic feasible form.
///
/// Columns are the original columns, then one artificial column per row and possibly one
/// auxiliary column.
fn artificial_tableau<O: OperationSet>(tableau: &Tableau<O>) -> Result<Tableau<O>> {
    let operations = tableau.operations();
    let (nr_rows, nr_columns) = (tableau.nr_rows(), tableau.nr_columns());
    let needs_auxiliary = !tableau.is_feasible();
    let (zero, unit) = (operations.zero(), operations.unit());

    let mut cost = vec![zero.clone(); nr_columns];
    cost.extend(std::iter::repeat_n(unit.clone(), nr_rows));
    if needs_auxiliary {
        cost.push(unit.clone());
    }
    cost.push(zero.clone());

    let mut rows = vec![Vector::new(operations.clone(), cost)];
    for (index, row) in tableau.rows()[1..].iter().enumerate() {
        let mut elements = row.elements()[..nr_columns].to_vec();
        elements.extend((0..nr_rows).map(|artificial| {
            if artificial == index { unit.clone() } else { zero.clone() }
        }));
        if needs_auxiliary {
            elements.push(operations.negate(&unit));
        }
        elements.push(row[nr_columns].clone());
        rows.push(Vector::new(operations.clone(), elements));
    }

    let mut artificial = Tableau::from_rows(operations.clone(), rows);
    for row in 1..=nr_rows {
        artificial.pivot(row, nr_columns + row - 1)?;
    }
    if needs_auxiliary {
        let most_negative = (1..=nr_rows)
            .min_by(|&left, &right| operations.compare(&tableau.rows()[left][nr_columns], &tableau.rows()[right][nr_columns]));
        if let Some(row) = most_negative {
            artificial.pivot(row, nr_columns + nr_rows)?;
        }
    }

    debug_assert!(artificial.is_basic_feasible());
    Ok(artificial)
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau at an optimum of value zero.
/// * `nr_columns`: Number of columns that are not artificial, these come first.
///
/// # Return value
///
/// Sorted tableau indices of rows that only have an artificial basis column. These rows are
/// linear combinations of the other rows.
fn remove_artificial_basis_variables<O: OperationSet>(
    tableau: &mut Tableau<O>,
    nr_columns: usize,
) -> Result<Vec<usize>> {
    let mut rows_to_remove = Vec::new();
    for row in 1..=tableau.nr_rows() {
        let basis = tableau.basis()
            .ok_or_else(|| Error::IllegalState("Artificial tableau lost its basis".to_string()))?;
        if basis[row - 1] < nr_columns {
            continue;
        }

        let operations = tableau.operations();
        let replacement = (0..nr_columns)
            .find(|&column| !operations.is_zero(&tableau.rows()[row][column]));
        match replacement {
            Some(column) => tableau.pivot(row, column)?,
            None => rows_to_remove.push(row),
        }
    }

    Ok(rows_to_remove)
}

/// The tableau of the original problem in the basis found by the artificial problem.
///
/// The artificial columns and redundant rows are dropped, the original costs are restored and
/// the basic columns are priced out.
fn without_artificial_columns<O: OperationSet>(
    artificial: &Tableau<O>,
    original: &Tableau<O>,
    rows_to_remove: &[usize],
) -> Result<Tableau<O>> {
    let operations = original.operations();
    let nr_columns = original.nr_columns();
    let value_column = artificial.nr_columns();

    let mut rows = vec![original.rows()[0].clone()];
    rows.extend(artificial.rows()[1..].iter().map(|row| {
        let mut elements = row.elements()[..nr_columns].to_vec();
        elements.push(row[value_column].clone());
        Vector::new(operations.clone(), elements)
    }));

    let mut tableau = Tableau::from_rows(operations.clone(), rows);
    tableau.remove_rows(rows_to_remove);

    for row in 1..=tableau.nr_rows() {
        let column = (0..nr_columns)
            .find(|&column| tableau.is_unit_column(column, row))
            .ok_or_else(|| Error::IllegalState(format!("No basic column for row {row}")))?;
        if !operations.is_zero(&tableau.rows()[0][column]) {
            tableau.pivot(row, column)?;
        }
    }

    debug_assert!(tableau.is_basic_feasible());
    Ok(tableau)
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<O: OperationSet> {
    /// The problem is feasible.
    Feasible {
        /// Whether rows were removed.
        rank: Rank,
        /// Basic feasible tableau of the problem, without the removed rows.
        tableau: Tableau<O>,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// Constraint indices, counting from zero. The `Vec<usize>` is sorted and contains no
    /// duplicate values.
    Deficient(Vec<usize>),
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::phase_one::{compute_basic_feasible, Rank, RankedFeasibilityResult};
    use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_algebra::matrix::Matrix;
    use crate::data::linear_algebra::vector::Vector;
    use crate::data::number_types::rational::{rational, RationalOperations};
    use crate::tests::{problem_2, problem_3};

    fn vector(values: &[i64]) -> Vector<RationalOperations> {
        Vector::new(RationalOperations, values.iter().map(|&v| rational(v, 1)).collect())
    }

    fn tableau(rows: &[&[i64]], b: &[i64], c: &[i64]) -> Tableau<RationalOperations> {
        let elements = rows.concat().into_iter().map(|v| rational(v, 1)).collect();
        let a = Matrix::from_elements(RationalOperations, elements, c.len()).unwrap();
        Tableau::new(RationalOperations, &a, &vector(b), &vector(c), rational(0, 1)).unwrap()
    }

    #[test]
    fn already_feasible() {
        let tableau = problem_2::create_tableau();
        let result = compute_basic_feasible::<_, FirstProfitable>(tableau.clone(), None).unwrap();
        assert_eq!(result, RankedFeasibilityResult::Feasible { rank: Rank::Full, tableau });
    }

    #[test]
    fn negative_constraint_value() {
        // x >= 1 and x <= 3, as -x + s1 = -1 and x + s2 = 3
        let start = tableau(&[&[-1, 1, 0], &[1, 0, 1]], &[-1, 3], &[1, 0, 0]);
        match compute_basic_feasible::<_, FirstProfitable>(start, None).unwrap() {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                assert_eq!(rank, Rank::Full);
                assert!(tableau.is_basic_feasible());
                assert_eq!(tableau.nr_columns(), 3);
                assert_eq!(tableau.basic_solution(), Some(vector(&[3, 2, 0])));
                assert_eq!(tableau.value(), &rational(3, 1));
            },
            RankedFeasibilityResult::Infeasible => panic!("problem is feasible"),
        }
    }

    #[test]
    fn infeasible() {
        // x >= 1 and x <= 0
        let start = tableau(&[&[-1, 1, 0], &[1, 0, 1]], &[-1, 0], &[1, 0, 0]);
        let result = compute_basic_feasible::<_, FirstProfitable>(start, None).unwrap();
        assert_eq!(result, RankedFeasibilityResult::Infeasible);
    }

    #[test]
    fn redundant_row() {
        let start = problem_3::create_tableau();
        match compute_basic_feasible::<_, FirstProfitable>(start, None).unwrap() {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                assert_eq!(rank, Rank::Deficient(vec![1]));
                assert_eq!(tableau.nr_rows(), 1);
                assert!(tableau.is_basic_feasible());
            },
            RankedFeasibilityResult::Infeasible => panic!("problem is feasible"),
        }
    }
}
