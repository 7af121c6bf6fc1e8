//! # Solving small linear programs
use std::collections::HashMap;

use utensils::algorithm::LPSolver;
use utensils::algorithm::two_phase::SimplexSolver;
use utensils::algorithm::two_phase::strategy::pivot_rule::SteepestDescent;
use utensils::data::linear_algebra::matrix::Matrix;
use utensils::data::linear_algebra::vector::Vector;
use utensils::data::linear_program::constraint::LinearConstraint;
use utensils::data::linear_program::elements::Variable;
use utensils::data::linear_program::expression::LinearExpression;
use utensils::data::linear_program::function::LinearFunction;
use utensils::data::linear_program::program::LinearProgram;
use utensils::data::number_types::rational::{rational, RationalOperations};
use utensils::error::Error;

type Ops = RationalOperations;

fn vector(values: &[i64]) -> Vector<Ops> {
    Vector::new(RationalOperations, values.iter().map(|&v| rational(v, 1)).collect())
}

fn row(values: &[i64]) -> Matrix<Ops> {
    Matrix::from_elements(RationalOperations, vector(values).into_elements(), values.len()).unwrap()
}

/// min 2x + 3y subject to x + y >= 4, x + 3y >= 6.
fn diet() -> (LinearProgram<Ops>, Variable) {
    let x = Variable::new(2);
    let mut program = LinearProgram::minimize(RationalOperations, LinearFunction::variable(vector(&[2, 3]), x).unwrap());
    for (coefficients, bound) in [([1, 1], 4), ([1, 3], 6)] {
        let left = LinearExpression::variable(row(&coefficients), x).unwrap();
        program.constrain(LinearConstraint::greater_than_equal(left, LinearExpression::constant(vector(&[bound]))).unwrap());
    }

    (program, x)
}

#[test]
fn minimize() {
    let (program, x) = diet();
    let check = program.clone();
    let solution = SimplexSolver::new(program).solve().unwrap();

    assert_eq!(solution.value(), &rational(9, 1));
    assert_eq!(solution.variable_values(x), Some(vector(&[3, 1])));
    assert_eq!(check.is_feasible(&solution.values()), Ok(true));
    assert_eq!(check.objective_value(&solution.values()), Ok(rational(9, 1)));
}

#[test]
fn pivot_rules_agree() {
    let (program, _) = diet();
    let first = LPSolver::solve(SimplexSolver::new(program.clone())).unwrap();
    let steepest = LPSolver::solve(SimplexSolver::new(program).with_pivot_rule::<SteepestDescent>()).unwrap();
    assert_eq!(first.value(), steepest.value());
}

#[test]
fn several_variables() {
    // max x + y subject to x + 2y <= 4, x - y == 1
    let x = Variable::new(1);
    let y = Variable::new(1);
    let goal = LinearFunction::new(vec![(vector(&[1]), x.into()), (vector(&[1]), y.into())]).unwrap();
    let mut program = LinearProgram::maximize(RationalOperations, goal);

    let left = LinearExpression::new(vec![(row(&[1]), x.into()), (row(&[2]), y.into())]).unwrap();
    program.constrain(LinearConstraint::less_than_equal(left, LinearExpression::constant(vector(&[4]))).unwrap());
    let left = LinearExpression::identity(RationalOperations, x);
    let right = LinearExpression::identity(RationalOperations, y).add_constant(vector(&[1])).unwrap();
    program.constrain(LinearConstraint::equal(left, right).unwrap());

    let solution = SimplexSolver::new(program).solve().unwrap();
    assert_eq!(solution.value(), &rational(3, 1));
    assert_eq!(
        solution.values(),
        HashMap::from([(x, vector(&[2])), (y, vector(&[1]))]),
    );
}

#[test]
fn infeasible() {
    let (mut program, x) = diet();
    let left = LinearExpression::variable(row(&[1, 1]), x).unwrap();
    program.constrain(LinearConstraint::less_than_equal(left, LinearExpression::constant(vector(&[1]))).unwrap());

    assert_eq!(SimplexSolver::new(program).solve(), Err(Error::Infeasible));
}
