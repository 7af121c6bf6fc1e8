//! # Linear algebra primitives
//!
//! Dense vectors and matrices over an arbitrary `OperationSet`.
use crate::error::{Error, Result};

pub mod matrix;
pub mod utilities;
pub mod vector;

/// Raise a dimension mismatch unless two sizes are equal.
pub(crate) fn check_sizes(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(Error::dimensions("Sizes don't match", left, right))
    }
}
