//! # Errors
//!
//! Every fallible operation in this crate reports one of the variants of [`Error`]. Errors are
//! never recovered from internally: bounds and dimensions are validated before any mutation, so an
//! operation either completes or leaves its receiver untouched.
use thiserror::Error;

/// Result type alias using this crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the linear algebra primitives and the algorithms built on them.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Two operands of an operation have incompatible sizes.
    #[error("Dimension mismatch: {message}")]
    DimensionMismatch {
        /// Description containing both sizes.
        message: String,
    },

    /// An element, row, column or region was accessed outside of its valid range.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the indexed dimension.
        len: usize,
    },

    /// An input was rejected at construction or call time.
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// An operation was invoked before its preconditions were met, or did not converge.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// The auxiliary problem of the first phase has a nonzero optimum.
    #[error("Illegal state: problem is infeasible")]
    Infeasible,

    /// An improving column has no positive entry to pivot on.
    #[error("Illegal state: problem is unbounded")]
    Unbounded,

    /// The operation is advertised but not available.
    #[error("Unimplemented: {0}")]
    Unimplemented(&'static str),
}

impl Error {
    /// Create a dimension mismatch error from two sizes.
    ///
    /// # Arguments
    ///
    /// * `context`: Short description of what was compared, e.g. "Sizes don't match".
    /// * `left`: Size of the receiver.
    /// * `right`: Size of the other operand.
    pub fn dimensions(context: &str, left: impl std::fmt::Display, right: impl std::fmt::Display) -> Self {
        Error::DimensionMismatch { message: format!("{context}, got {left} vs {right}") }
    }

    /// Whether this error belongs to the illegal state class.
    ///
    /// Infeasibility and unboundedness are detected states of a solver, not invalid inputs.
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Error::IllegalState(_) | Error::Infeasible | Error::Unbounded)
    }
}

/// Return an `IndexOutOfBounds` error unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}
