//! # Linear programs
//!
//! A goal function together with a list of constraints. Every variable is implicitly nonnegative.
use std::collections::HashMap;

use crate::data::linear_algebra::vector::Vector;
use crate::data::linear_program::constraint::LinearConstraint;
use crate::data::linear_program::elements::Variable;
use crate::data::linear_program::function::LinearFunction;
use crate::data::number_types::traits::OperationSet;
use crate::error::Result;

/// A maximization problem over nonnegative variables.
///
/// Minimization problems are stored as the maximization of the negated goal function, which is
/// recorded so that the optimal value can be negated back.
#[derive(Clone, Debug)]
pub struct LinearProgram<O: OperationSet> {
    operations: O,
    goal: LinearFunction<O>,
    negated: bool,
    /// All variables, in order of first appearance. This order defines the column order.
    variables: Vec<Variable>,
    constraints: Vec<LinearConstraint<O>>,
}

impl<O: OperationSet> LinearProgram<O> {
    /// Maximize the given goal function.
    pub fn maximize(operations: O, goal: LinearFunction<O>) -> Self {
        Self::with_goal(operations, goal, false)
    }

    /// Minimize the given goal function.
    pub fn minimize(operations: O, goal: LinearFunction<O>) -> Self {
        Self::with_goal(operations, goal.negate(), true)
    }

    fn with_goal(operations: O, goal: LinearFunction<O>, negated: bool) -> Self {
        let variables = goal.variables();

        Self {
            operations,
            goal,
            negated,
            variables,
            constraints: Vec::new(),
        }
    }

    /// Create a new variable that is part of this program.
    pub fn variable(&mut self, size: usize) -> Variable {
        let variable = Variable::new(size);
        self.variables.push(variable);
        variable
    }

    /// Make a variable part of this program, even if no constraint or goal mentions it.
    pub fn declare(&mut self, variable: Variable) -> &mut Self {
        if !self.variables.contains(&variable) {
            self.variables.push(variable);
        }
        self
    }

    /// Add a constraint, declaring all variables in it.
    pub fn constrain(&mut self, constraint: LinearConstraint<O>) -> &mut Self {
        for variable in constraint.variables() {
            self.declare(variable);
        }
        self.constraints.push(constraint);
        self
    }

    #[allow(missing_docs)]
    pub fn operations(&self) -> &O {
        &self.operations
    }

    /// The goal function that is maximized, negated if the program was created to minimize.
    pub fn goal(&self) -> &LinearFunction<O> {
        &self.goal
    }

    /// Whether the goal function was negated to turn minimization into maximization.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[allow(missing_docs)]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[allow(missing_docs)]
    pub fn constraints(&self) -> &[LinearConstraint<O>] {
        &self.constraints
    }

    /// Total number of scalar decision variables.
    pub fn nr_variables(&self) -> usize {
        self.variables.iter().map(Variable::size).sum()
    }

    /// Objective value of the given variable values, in the direction the program was created with.
    pub fn objective_value(&self, values: &HashMap<Variable, Vector<O>>) -> Result<O::Element> {
        let value = self.goal.evaluate(values)?;
        Ok(if self.negated { self.operations.negate(&value) } else { value })
    }

    /// Whether the values are nonnegative and satisfy all constraints.
    pub fn is_feasible(&self, values: &HashMap<Variable, Vector<O>>) -> Result<bool> {
        let nonnegative = values.values()
            .flat_map(Vector::iter)
            .all(|value| !self.operations.is_negative(value));
        if !nonnegative {
            return Ok(false);
        }

        for constraint in &self.constraints {
            if !constraint.is_satisfied(values)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::data::linear_algebra::vector::Vector;
    use crate::data::linear_program::elements::Variable;
    use crate::data::linear_program::function::LinearFunction;
    use crate::data::linear_program::program::LinearProgram;
    use crate::data::number_types::integer::IntegerOperations;
    use crate::tests::problem_1;

    type Ops = IntegerOperations<i64>;

    #[test]
    fn variable_order() {
        let x = Variable::new(2);
        let mut program = LinearProgram::maximize(Ops::new(), LinearFunction::variable(Vector::new(Ops::new(), vec![1, 1]), x).unwrap());
        let y = program.variable(3);
        program.declare(x);
        assert_eq!(program.variables(), &[x, y]);
        assert_eq!(program.nr_variables(), 5);
        assert!(!program.is_negated());
    }

    #[test]
    fn minimization_negates() {
        let x = Variable::new(1);
        let goal = LinearFunction::variable(Vector::new(Ops::new(), vec![2]), x).unwrap();
        let program = LinearProgram::minimize(Ops::new(), goal);
        assert!(program.is_negated());

        let values = HashMap::from([(x, Vector::new(Ops::new(), vec![3]))]);
        assert_eq!(program.goal().evaluate(&values).unwrap(), -6);
        assert_eq!(program.objective_value(&values).unwrap(), 6);
    }

    #[test]
    fn feasibility() {
        let (program, x) = problem_1::create_program();
        assert_eq!(program.constraints().len(), 2);

        let feasible = HashMap::from([(x, problem_1::vector(&[4.0, 0.0]))]);
        let violating = HashMap::from([(x, problem_1::vector(&[4.0, 1.0]))]);
        let negative = HashMap::from([(x, problem_1::vector(&[-1.0, 0.0]))]);
        assert!(program.is_feasible(&feasible).unwrap());
        assert!(!program.is_feasible(&violating).unwrap());
        assert!(!program.is_feasible(&negative).unwrap());
    }
}
