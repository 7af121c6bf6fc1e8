//! # Affine vector expressions
//!
//! A `LinearExpression` is a sum `A_1 x_1 + A_2 x_2 + ...` where every `x_i` is either a decision
//! variable or a constant vector. All products have the same dimension.
use std::collections::HashMap;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::elements::{Term, Variable};
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Sum of matrix-term products of equal height.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearExpression<O: OperationSet> {
    terms: Vec<(Matrix<O>, Term<O>)>,
}

impl<O: OperationSet> LinearExpression<O> {
    /// Create a new expression.
    ///
    /// # Arguments
    ///
    /// * `terms`: Matrix and term pairs, the width of each matrix equal to the size of its term.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` without terms, `DimensionMismatch` when a matrix doesn't fit its term or
    /// when the products would have different sizes.
    pub fn new(terms: Vec<(Matrix<O>, Term<O>)>) -> Result<Self> {
        let Some((first, _)) = terms.first() else {
            return Err(Error::IllegalArgument("At least one term must be specified".to_string()));
        };

        let dimension = first.height();
        for (matrix, term) in &terms {
            if matrix.width() != term.size() {
                return Err(Error::dimensions(
                    "Matrix and vector sizes are incompatible", matrix.width(), term.size(),
                ));
            }
            if matrix.height() != dimension {
                return Err(Error::dimensions("Term sizes are incompatible", dimension, matrix.height()));
            }
        }

        Ok(Self { terms })
    }

    /// The single term `coefficients * variable`.
    pub fn variable(coefficients: Matrix<O>, variable: Variable) -> Result<Self> {
        Self::new(vec![(coefficients, Term::Variable(variable))])
    }

    /// The variable itself, multiplied by an identity matrix.
    pub fn identity(operations: O, variable: Variable) -> Self {
        let matrix = Matrix::identity(operations, variable.size());
        Self { terms: vec![(matrix, Term::Variable(variable))] }
    }

    /// A constant vector, multiplied by an identity matrix.
    pub fn constant(vector: Vector<O>) -> Self {
        let matrix = Matrix::identity(vector.operations().clone(), vector.size());
        Self { terms: vec![(matrix, Term::Constant(vector))] }
    }

    /// The constant zero vector of the given dimension.
    pub fn zero(operations: O, dimension: usize) -> Self {
        Self::constant(Vector::null_vector(operations, dimension))
    }

    /// All terms, in the order they were added.
    pub fn terms(&self) -> &[(Matrix<O>, Term<O>)] {
        &self.terms
    }

    /// Number of terms.
    pub fn nr_terms(&self) -> usize {
        self.terms.len()
    }

    /// Size of the vector this expression evaluates to.
    pub fn dimension(&self) -> usize {
        self.terms[0].0.height()
    }

    /// The operation set of the coefficients.
    pub fn operations(&self) -> &O {
        self.terms[0].0.operations()
    }

    /// Variables in order of first appearance, without repetitions.
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();
        for variable in self.terms.iter().filter_map(|(_, term)| term.variable()) {
            if !variables.contains(&variable) {
                variables.push(variable);
            }
        }
        variables
    }

    /// Compute the value of this expression.
    ///
    /// # Arguments
    ///
    /// * `values`: Value of every variable that appears in the expression.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` when a variable has no value, `DimensionMismatch` when a value has the
    /// wrong size.
    pub fn evaluate(&self, values: &HashMap<Variable, Vector<O>>) -> Result<Vector<O>> {
        let mut sum = Vector::null_vector(self.operations().clone(), self.dimension());
        for (matrix, term) in &self.terms {
            let product = match term {
                Term::Constant(vector) => matrix.multiply_vector(vector)?,
                Term::Variable(variable) => {
                    let value = values.get(variable).ok_or_else(|| {
                        Error::IllegalArgument(format!("No value for variable {variable}"))
                    })?;
                    matrix.multiply_vector(value)?
                },
            };
            sum.add_modify(&product)?;
        }

        Ok(sum)
    }

    /// Value of the constant terms only.
    pub fn constant_part(&self) -> Result<Vector<O>> {
        let mut sum = Vector::null_vector(self.operations().clone(), self.dimension());
        for (matrix, term) in &self.terms {
            if let Term::Constant(vector) = term {
                sum.add_modify(&matrix.multiply_vector(vector)?)?;
            }
        }

        Ok(sum)
    }

    /// All terms of both expressions.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let terms = self.terms.iter().chain(&other.terms).cloned().collect();
        Self::new(terms)
    }

    /// This expression with a constant vector added.
    pub fn add_constant(&self, vector: Vector<O>) -> Result<Self> {
        self.add(&Self::constant(vector))
    }

    /// This expression with the negation of `other` added.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.add(&other.negate())
    }

    /// This expression with a constant vector subtracted.
    pub fn subtract_constant(&self, vector: Vector<O>) -> Result<Self> {
        self.subtract(&Self::constant(vector))
    }

    /// Every coefficient multiplied by `value`.
    pub fn scalar(&self, value: &O::Element) -> Self {
        Self {
            terms: self.terms.iter()
                .map(|(matrix, term)| (matrix.scalar(value), term.clone()))
                .collect(),
        }
    }

    /// Every coefficient multiplied by the inverse of `value`.
    pub fn divide(&self, value: &O::Element) -> Self {
        let inverse = self.operations().inverse(value);
        self.scalar(&inverse)
    }

    /// Every coefficient negated.
    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter()
                .map(|(matrix, term)| (matrix.negate(), term.clone()))
                .collect(),
        }
    }
}
