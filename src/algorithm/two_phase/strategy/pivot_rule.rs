//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::OperationSet;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, using the minimum ratio test.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with a positive relative cost, `None` if there is no such column.
    fn select_primal_pivot_column<O: OperationSet>(&mut self, tableau: &Tableau<O>) -> Option<usize>;
}

/// Simply pivot on the first column which has a positive relative cost.
#[derive(Debug, Default)]
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<O: OperationSet>(&mut self, tableau: &Tableau<O>) -> Option<usize> {
        let operations = tableau.operations();
        (0..tableau.nr_columns())
            .find(|&column| operations.is_positive(&tableau.relative_cost(column)))
    }
}

/// Pivot on the column with the largest relative cost, the first one among equals.
///
/// This is Dantzig's original rule.
#[derive(Debug, Default)]
pub struct SteepestDescent;

impl PivotRule for SteepestDescent {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<O: OperationSet>(&mut self, tableau: &Tableau<O>) -> Option<usize> {
        let operations = tableau.operations();
        let mut best: Option<(usize, O::Element)> = None;
        for column in 0..tableau.nr_columns() {
            let cost = tableau.relative_cost(column);
            if !operations.is_positive(&cost) {
                continue;
            }
            let improves = match &best {
                Some((_, best_cost)) => operations.compare(&cost, best_cost).is_gt(),
                None => true,
            };
            if improves {
                best = Some((column, cost));
            }
        }

        best.map(|(column, _)| column)
    }
}
