//! # Scalar goal functions
use std::collections::HashMap;

use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::elements::{Term, Variable};
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Sum of inner products `c_1 . x_1 + c_2 . x_2 + ...`.
///
/// Each `x_i` is a variable or a constant vector, constant terms make up the offset of the
/// function.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearFunction<O: OperationSet> {
    terms: Vec<(Vector<O>, Term<O>)>,
}

impl<O: OperationSet> LinearFunction<O> {
    /// Create a new function.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` without terms, `DimensionMismatch` when coefficients don't have the size
    /// of their term.
    pub fn new(terms: Vec<(Vector<O>, Term<O>)>) -> Result<Self> {
        if terms.is_empty() {
            return Err(Error::IllegalArgument("At least one term must be specified".to_string()));
        }
        for (coefficients, term) in &terms {
            if coefficients.size() != term.size() {
                return Err(Error::dimensions(
                    "Coefficient and vector sizes are incompatible", coefficients.size(), term.size(),
                ));
            }
        }

        Ok(Self { terms })
    }

    /// The single term `coefficients . variable`.
    pub fn variable(coefficients: Vector<O>, variable: Variable) -> Result<Self> {
        Self::new(vec![(coefficients, Term::Variable(variable))])
    }

    /// All terms, in the order they were added.
    pub fn terms(&self) -> &[(Vector<O>, Term<O>)] {
        &self.terms
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

    /// Sum of the coefficients of all terms with this variable.
    ///
    /// `None` if the variable doesn't appear.
    pub fn coefficients(&self, variable: Variable) -> Option<Vector<O>> {
        let operations = self.operations();
        // All coefficients of a variable have the variable's size, see `new`
        self.terms.iter()
            .filter(|(_, term)| term.variable() == Some(variable))
            .map(|(coefficients, _)| coefficients.clone())
            .reduce(|total, coefficients| {
                let elements = total.iter()
                    .zip(coefficients.iter())
                    .map(|(left, right)| operations.add(left, right))
                    .collect();
                Vector::new(operations.clone(), elements)
            })
    }

    /// Compute the value of this function.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` when a variable has no value, `DimensionMismatch` when a value has the
    /// wrong size.
    pub fn evaluate(&self, values: &HashMap<Variable, Vector<O>>) -> Result<O::Element> {
        let operations = self.operations();
        let mut total = operations.zero();
        for (coefficients, term) in &self.terms {
            let product = match term {
                Term::Constant(vector) => coefficients.dot(vector)?,
                Term::Variable(variable) => {
                    let value = values.get(variable).ok_or_else(|| {
                        Error::IllegalArgument(format!("No value for variable {variable}"))
                    })?;
                    coefficients.dot(value)?
                },
            };
            total = operations.add(&total, &product);
        }

        Ok(total)
    }

    /// Value of the constant terms only.
    pub fn constant_part(&self) -> Result<O::Element> {
        let operations = self.operations();
        let mut total = operations.zero();
        for (coefficients, term) in &self.terms {
            if let Term::Constant(vector) = term {
                total = operations.add(&total, &coefficients.dot(vector)?);
            }
        }

        Ok(total)
    }

    /// All terms of both functions.
    pub fn add(&self, other: &Self) -> Self {
        Self { terms: self.terms.iter().chain(&other.terms).cloned().collect() }
    }

    /// Every coefficient multiplied by `value`.
    pub fn scalar(&self, value: &O::Element) -> Self {
        Self {
            terms: self.terms.iter()
                .map(|(coefficients, term)| (coefficients.scalar(value), term.clone()))
                .collect(),
        }
    }

    /// Every coefficient negated.
    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter()
                .map(|(coefficients, term)| (coefficients.negate(), term.clone()))
                .collect(),
        }
    }
}
