//! # Representation of optimal solutions
//!
//! The solver works on one long vector with all variables next to each other. A solution keeps
//! track of where each variable starts, so the values can be looked up by variable.
use std::collections::HashMap;

use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::elements::Variable;
use crate::data::number_types::traits::OperationSet;

/// Optimal value and an optimal assignment of all variables of a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct LPSolution<O: OperationSet> {
    value: O::Element,
    vector: Vector<O>,
    offsets: Vec<(Variable, usize)>,
}

impl<O: OperationSet> LPSolution<O> {
    /// Create a new `LPSolution` instance.
    ///
    /// # Arguments
    ///
    /// * `value`: Value of the goal function, in the direction of the program.
    /// * `vector`: Values of all variables, concatenated in the order of `variables`.
    /// * `variables`: Variables of the program, defining how `vector` is split.
    pub fn new(value: O::Element, vector: Vector<O>, variables: &[Variable]) -> Self {
        debug_assert_eq!(variables.iter().map(Variable::size).sum::<usize>(), vector.size());

        let offsets = variables.iter()
            .scan(0, |offset, variable| {
                let start = *offset;
                *offset += variable.size();
                Some((*variable, start))
            })
            .collect();

        Self { value, vector, offsets }
    }

    /// Optimal objective value.
    pub fn value(&self) -> &O::Element {
        &self.value
    }

    /// All variable values next to each other.
    pub fn vector(&self) -> &Vector<O> {
        &self.vector
    }

    /// The values of one variable.
    ///
    /// `None` if the variable is not part of the program.
    pub fn variable_values(&self, variable: Variable) -> Option<Vector<O>> {
        self.offsets.iter()
            .find(|(candidate, _)| *candidate == variable)
            .map(|&(_, start)| {
                let elements = self.vector.elements()[start..start + variable.size()].to_vec();
                Vector::new(self.vector.operations().clone(), elements)
            })
    }

    /// Values of all variables, by variable.
    pub fn values(&self) -> HashMap<Variable, Vector<O>> {
        self.offsets.iter()
            .filter_map(|&(variable, _)| self.variable_values(variable).map(|values| (variable, values)))
            .collect()
    }

    /// Split into the value and the vector.
    pub fn into_parts(self) -> (O::Element, Vector<O>) {
        (self.value, self.vector)
    }
}
