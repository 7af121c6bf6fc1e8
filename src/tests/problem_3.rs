//! max x1 subject to x1 + x2 = 2, 2 x1 + 2 x2 = 4, x >= 0, in rationals.
//!
//! The second equality is twice the first one.
use crate::algorithm::two_phase::SimplexSolver;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::constraint::LinearConstraint;
use crate::data::linear_program::elements::Variable;
use crate::data::linear_program::expression::LinearExpression;
use crate::data::linear_program::function::LinearFunction;
use crate::data::linear_program::program::LinearProgram;
use crate::data::number_types::rational::{rational, RationalOperations};

#[test]
fn conversion_pipeline() {
    let tableau = create_tableau();
    assert_eq!(tableau.basis(), None);

    let (program, _) = create_program();
    let solution = SimplexSolver::new(program).solve().unwrap();
    assert_eq!(solution.value(), &rational(2, 1));
}

fn vector(values: &[i64]) -> Vector<RationalOperations> {
    Vector::new(RationalOperations, values.iter().map(|&v| rational(v, 1)).collect())
}

fn a() -> Matrix<RationalOperations> {
    Matrix::from_elements(RationalOperations, [1, 1, 2, 2].map(|v| rational(v, 1)).to_vec(), 2).unwrap()
}

pub fn create_tableau() -> Tableau<RationalOperations> {
    Tableau::new(RationalOperations, &a(), &vector(&[2, 4]), &vector(&[1, 0]), rational(0, 1)).unwrap()
}

pub fn create_program() -> (LinearProgram<RationalOperations>, Variable) {
    let x = Variable::new(2);
    let goal = LinearFunction::variable(vector(&[1, 0]), x).unwrap();
    let mut program = LinearProgram::maximize(RationalOperations, goal);

    let left = LinearExpression::variable(a(), x).unwrap();
    let right = LinearExpression::constant(vector(&[2, 4]));
    program.constrain(LinearConstraint::equal(left, right).unwrap());

    (program, x)
}
