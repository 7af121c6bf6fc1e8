//! # Standard form
//!
//! Rewriting a `LinearProgram` as `max c x + d` subject to `A x = b, x >= 0`.
//!
//! Constraints `left >= right` are first rewritten as `right <= left`. Every `left <= right`
//! then gets a fresh slack variable `s >= 0` of its dimension and becomes `left + s = right`.
//! Finally, all variable terms are moved to the left and all constant terms to the right.
use std::collections::HashMap;

use enum_map::{enum_map, EnumMap};
use log::debug;

use crate::data::linear_algebra::matrix::{Major, Matrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::constraint::LinearConstraint;
use crate::data::linear_program::elements::{ConstraintKind, Term, Variable};
use crate::data::linear_program::program::LinearProgram;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// A linear program in equality form over nonnegative variables.
#[derive(Clone, Debug)]
pub struct StandardForm<O: OperationSet> {
    /// Constraint matrix, one column per scalar variable.
    pub a: Matrix<O>,
    /// Constraint values.
    pub b: Vector<O>,
    /// Cost vector, zero for the slack variables.
    pub c: Vector<O>,
    /// Constant part of the goal function.
    pub d: O::Element,
    /// Variables of the program followed by the slack variables; this order is the column order.
    pub variables: Vec<Variable>,
    /// Number of rows that stem from each kind of constraint.
    pub nr_rows_by_kind: EnumMap<ConstraintKind, usize>,
}

impl<O: OperationSet> StandardForm<O> {
    /// Convert a program.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` if a constraint mentions a variable that isn't part of the program.
    pub fn from_program(program: &LinearProgram<O>) -> Result<Self> {
        let operations = program.operations();

        let mut nr_rows_by_kind = enum_map! { _ => 0 };
        let mut variables = program.variables().to_vec();
        let mut equalities = Vec::with_capacity(program.constraints().len());
        for constraint in program.constraints() {
            nr_rows_by_kind[constraint.kind()] += constraint.dimension();

            let constraint = match constraint.kind() {
                ConstraintKind::GreaterThanEqual => constraint.clone().flip(),
                _ => constraint.clone(),
            };
            let slack = match constraint.kind() {
                ConstraintKind::LessThanEqual => {
                    let slack = Variable::new(constraint.dimension());
                    variables.push(slack);
                    Some(slack)
                },
                _ => None,
            };
            equalities.push((constraint, slack));
        }

        let mut offsets = HashMap::with_capacity(variables.len());
        let mut nr_columns = 0;
        for variable in &variables {
            offsets.insert(*variable, nr_columns);
            nr_columns += variable.size();
        }

        let mut rows = Vec::new();
        let mut b = Vec::new();
        for (constraint, slack) in &equalities {
            let (block, values) = equality_rows(operations, constraint, *slack, &offsets, nr_columns)?;
            rows.extend(block);
            b.extend(values);
        }

        let (c, d) = cost_vector(program, &offsets, nr_columns)?;
        let columns = (0..nr_columns)
            .map(|column| Vector::from_fn(operations.clone(), rows.len(), |row| rows[row][column].clone()))
            .collect();
        let a = Matrix::from_vectors_unchecked(operations.clone(), columns, Major::Column);

        debug!(
            "Standard form has {} rows ({} equality, {} less than, {} greater than) and {} columns",
            a.height(),
            nr_rows_by_kind[ConstraintKind::Equal],
            nr_rows_by_kind[ConstraintKind::LessThanEqual],
            nr_rows_by_kind[ConstraintKind::GreaterThanEqual],
            nr_columns,
        );

        Ok(Self {
            a,
            b: Vector::new(operations.clone(), b),
            c,
            d,
            variables,
            nr_rows_by_kind,
        })
    }
}

fn offset_of(offsets: &HashMap<Variable, usize>, variable: Variable) -> Result<usize> {
    offsets.get(&variable).copied()
        .ok_or_else(|| Error::IllegalArgument(format!("Variable {variable} is not part of the program")))
}

/// Rows of `A` and values of `b` for a constraint that is `<=` or `==`.
fn equality_rows<O: OperationSet>(
    operations: &O,
    constraint: &LinearConstraint<O>,
    slack: Option<Variable>,
    offsets: &HashMap<Variable, usize>,
    nr_columns: usize,
) -> Result<(Vec<Vec<O::Element>>, Vec<O::Element>)> {
    debug_assert_ne!(constraint.kind(), ConstraintKind::GreaterThanEqual);

    let dimension = constraint.dimension();
    let mut rows = vec![vec![operations.zero(); nr_columns]; dimension];
    let mut values = vec![operations.zero(); dimension];

    let sides = [(constraint.left(), false), (constraint.right(), true)];
    for (expression, is_right) in sides {
        for (matrix, term) in expression.terms() {
            match term {
                Term::Variable(variable) => {
                    let offset = offset_of(offsets, *variable)?;
                    for (i, row) in rows.iter_mut().enumerate() {
                        for j in 0..variable.size() {
                            let coefficient = matrix.entry(i, j);
                            row[offset + j] = if is_right {
                                operations.subtract(&row[offset + j], coefficient)
                            } else {
                                operations.add(&row[offset + j], coefficient)
                            };
                        }
                    }
                },
                Term::Constant(vector) => {
                    let product = matrix.multiply_vector(vector)?;
                    for (value, constant) in values.iter_mut().zip(product.iter()) {
                        *value = if is_right {
                            operations.add(value, constant)
                        } else {
                            operations.subtract(value, constant)
                        };
                    }
                },
            }
        }
    }

    if let Some(slack) = slack {
        let offset = offset_of(offsets, slack)?;
        for (i, row) in rows.iter_mut().enumerate() {
            row[offset + i] = operations.unit();
        }
    }

    Ok((rows, values))
}

/// Cost vector `c` and offset `d` of the goal function.
fn cost_vector<O: OperationSet>(
    program: &LinearProgram<O>,
    offsets: &HashMap<Variable, usize>,
    nr_columns: usize,
) -> Result<(Vector<O>, O::Element)> {
    let operations = program.operations();

    let mut c = vec![operations.zero(); nr_columns];
    for (coefficients, term) in program.goal().terms() {
        if let Term::Variable(variable) = term {
            let offset = offset_of(offsets, *variable)?;
            for (j, coefficient) in coefficients.iter().enumerate() {
                c[offset + j] = operations.add(&c[offset + j], coefficient);
            }
        }
    }
    let d = program.goal().constant_part()?;

    Ok((Vector::new(operations.clone(), c), d))
}
