//! # Building blocks to describe linear programs.
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use enum_map::Enum;

use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;

static NEXT_VARIABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle to a vector of decision variables.
///
/// Handles are compared by identity: two variables of the same size are different variables.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable {
    id: usize,
    size: usize,
}

impl Variable {
    /// A fresh variable of `size` scalar components.
    pub fn new(size: usize) -> Self {
        Self {
            id: NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed),
            size,
        }
    }

    /// Number of scalar components.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}[{}]", self.id, self.size)
    }
}

/// The right operand of a term in an expression: either unknown or known.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum Term<O: OperationSet> {
    Variable(Variable),
    Constant(Vector<O>),
}

impl<O: OperationSet> Term<O> {
    /// Number of scalar components.
    pub fn size(&self) -> usize {
        match self {
            Term::Variable(variable) => variable.size(),
            Term::Constant(vector) => vector.size(),
        }
    }

    /// The variable, if this term is not constant.
    pub fn variable(&self) -> Option<Variable> {
        match self {
            Term::Variable(variable) => Some(*variable),
            Term::Constant(_) => None,
        }
    }
}

impl<O: OperationSet> From<Variable> for Term<O> {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl<O: OperationSet> From<Vector<O>> for Term<O> {
    fn from(vector: Vector<O>) -> Self {
        Term::Constant(vector)
    }
}

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum ConstraintKind {
    Equal,
    LessThanEqual,
    GreaterThanEqual,
}

impl ConstraintKind {
    /// Whether `left` and `right` are related as this kind demands.
    pub fn holds(self, ordering: std::cmp::Ordering) -> bool {
        match self {
            ConstraintKind::Equal => ordering.is_eq(),
            ConstraintKind::LessThanEqual => ordering.is_le(),
            ConstraintKind::GreaterThanEqual => ordering.is_ge(),
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintKind::Equal => "==",
            ConstraintKind::LessThanEqual => "<=",
            ConstraintKind::GreaterThanEqual => ">=",
        })
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::data::linear_algebra::vector::Vector;
    use crate::data::linear_program::elements::{ConstraintKind, Term, Variable};
    use crate::data::number_types::rational::{rational, RationalOperations};

    #[test]
    fn variables_are_distinct() {
        let x = Variable::new(2);
        let y = Variable::new(2);
        assert_ne!(x, y);
        assert_eq!(x, x);
        assert_eq!(x.size(), 2);
    }

    #[test]
    fn terms() {
        let x = Variable::new(3);
        let term: Term<RationalOperations> = x.into();
        assert_eq!(term.size(), 3);
        assert_eq!(term.variable(), Some(x));

        let constant: Term<_> = Vector::new(RationalOperations, vec![rational(1, 2)]).into();
        assert_eq!(constant.size(), 1);
        assert_eq!(constant.variable(), None);
    }

    #[test]
    fn kinds() {
        assert!(ConstraintKind::Equal.holds(Ordering::Equal));
        assert!(!ConstraintKind::Equal.holds(Ordering::Less));
        assert!(ConstraintKind::LessThanEqual.holds(Ordering::Less));
        assert!(!ConstraintKind::LessThanEqual.holds(Ordering::Greater));
        assert!(ConstraintKind::GreaterThanEqual.holds(Ordering::Equal));
        assert_eq!(ConstraintKind::LessThanEqual.to_string(), "<=");
    }
}
