//! # Vector (in)equalities
use std::collections::HashMap;

use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::elements::{ConstraintKind, Variable};
use crate::data::linear_program::expression::LinearExpression;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Element-wise relation between two expressions of the same dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearConstraint<O: OperationSet> {
    left: LinearExpression<O>,
    kind: ConstraintKind,
    right: LinearExpression<O>,
}

impl<O: OperationSet> LinearConstraint<O> {
    /// Create a new constraint.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when both sides have a different dimension.
    pub fn new(left: LinearExpression<O>, kind: ConstraintKind, right: LinearExpression<O>) -> Result<Self> {
        if left.dimension() != right.dimension() {
            return Err(Error::dimensions(
                "Left and right hand side must have the same dimension", left.dimension(), right.dimension(),
            ));
        }

        Ok(Self { left, kind, right })
    }

    /// `left == right`
    pub fn equal(left: LinearExpression<O>, right: LinearExpression<O>) -> Result<Self> {
        Self::new(left, ConstraintKind::Equal, right)
    }

    /// `left <= right`
    pub fn less_than_equal(left: LinearExpression<O>, right: LinearExpression<O>) -> Result<Self> {
        Self::new(left, ConstraintKind::LessThanEqual, right)
    }

    /// `left >= right`
    pub fn greater_than_equal(left: LinearExpression<O>, right: LinearExpression<O>) -> Result<Self> {
        Self::new(left, ConstraintKind::GreaterThanEqual, right)
    }

    #[allow(missing_docs)]
    pub fn left(&self) -> &LinearExpression<O> {
        &self.left
    }

    #[allow(missing_docs)]
    pub fn right(&self) -> &LinearExpression<O> {
        &self.right
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Number of scalar (in)equalities.
    pub fn dimension(&self) -> usize {
        self.left.dimension()
    }

    /// Variables of both sides, left before right, without repetitions.
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = self.left.variables();
        for variable in self.right.variables() {
            if !variables.contains(&variable) {
                variables.push(variable);
            }
        }
        variables
    }

    /// The same relation with both sides swapped, so `>=` becomes `<=` and vice versa.
    pub fn flip(self) -> Self {
        let kind = match self.kind {
            ConstraintKind::Equal => ConstraintKind::Equal,
            ConstraintKind::LessThanEqual => ConstraintKind::GreaterThanEqual,
            ConstraintKind::GreaterThanEqual => ConstraintKind::LessThanEqual,
        };

        Self { left: self.right, kind, right: self.left }
    }

    /// Whether every component satisfies the relation for these variable values.
    ///
    /// # Errors
    ///
    /// When one of the sides can't be evaluated, see `LinearExpression::evaluate`.
    pub fn is_satisfied(&self, values: &HashMap<Variable, Vector<O>>) -> Result<bool> {
        let left = self.left.evaluate(values)?;
        let right = self.right.evaluate(values)?;
        let operations = left.operations();

        Ok(left.iter().zip(right.iter())
            .all(|(x, y)| self.kind.holds(operations.compare(x, y))))
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::data::linear_algebra::matrix::Matrix;
    use crate::data::linear_algebra::vector::Vector;
    use crate::data::linear_program::constraint::LinearConstraint;
    use crate::data::linear_program::elements::{ConstraintKind, Variable};
    use crate::data::linear_program::expression::LinearExpression;
    use crate::data::number_types::float::DoubleOperations;
    use crate::error::Error;

    fn ops() -> DoubleOperations {
        DoubleOperations::new()
    }

    fn constant(values: &[f64]) -> LinearExpression<DoubleOperations> {
        LinearExpression::constant(Vector::new(ops(), values.to_vec()))
    }

    #[test]
    fn satisfaction() {
        let x = Variable::new(2);
        let sum = LinearExpression::variable(Matrix::from_elements(ops(), vec![1.0, 1.0], 2).unwrap(), x).unwrap();
        let constraint = LinearConstraint::less_than_equal(sum.clone(), constant(&[4.0])).unwrap();

        let inside = HashMap::from([(x, Vector::new(ops(), vec![1.0, 3.0]))]);
        let outside = HashMap::from([(x, Vector::new(ops(), vec![2.0, 3.0]))]);
        assert!(constraint.is_satisfied(&inside).unwrap());
        assert!(!constraint.is_satisfied(&outside).unwrap());

        let equality = LinearConstraint::equal(sum.clone(), constant(&[4.0])).unwrap();
        assert!(equality.is_satisfied(&inside).unwrap());
        assert!(!equality.is_satisfied(&outside).unwrap());

        let flipped = LinearConstraint::greater_than_equal(constant(&[4.0]), sum).unwrap().flip();
        assert_eq!(flipped.kind(), ConstraintKind::LessThanEqual);
        assert!(flipped.is_satisfied(&inside).unwrap());
        assert_eq!(flipped.variables(), vec![x]);
    }

    #[test]
    fn dimensions_must_agree() {
        let result = LinearConstraint::equal(constant(&[1.0, 2.0]), constant(&[1.0]));
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }
}
