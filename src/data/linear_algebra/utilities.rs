//! Helper functions for the `linear_algebra` module.
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::OperationSet;
use crate::error::{Error, Result};

/// Square identity matrix of the given size.
pub fn identity<O: OperationSet>(operations: O, size: usize) -> Matrix<O> {
    Matrix::identity(operations, size)
}

/// Element-wise average of a collection of vectors.
///
/// The sum is divided by the number of vectors, converted into the element type with `from_f64`.
///
/// # Errors
///
/// `IllegalArgument` when there are no vectors, `DimensionMismatch` when they have different sizes.
pub fn average<O: OperationSet>(vectors: &[Vector<O>]) -> Result<Vector<O>> {
    let first = vectors.first()
        .ok_or_else(|| Error::IllegalArgument("There must be at least 1 vector".to_string()))?;

    let ops = first.operations();
    let mut sum = Vector::null_vector(ops.clone(), first.size());
    for vector in vectors {
        sum.add_modify(vector)?;
    }

    let count = ops.from_f64(vectors.len() as f64);
    Ok(sum.map(|element| ops.divide(element, &count)))
}

/// Extend a set of vectors to a basis of the space they live in.
///
/// # Errors
///
/// Always `Unimplemented`.
pub fn extend_to_basis<O: OperationSet>(_vectors: &[Vector<O>]) -> Result<Vec<Vector<O>>> {
    Err(Error::Unimplemented("extend_to_basis"))
}

/// An orthonormal basis of which the span contains the given vectors.
///
/// # Errors
///
/// Always `Unimplemented`.
pub fn orthonormal_basis_containing<O: OperationSet>(_vectors: &[Vector<O>]) -> Result<Vec<Vector<O>>> {
    Err(Error::Unimplemented("orthonormal_basis_containing"))
}

/// Whether no vector is a linear combination of the others.
///
/// # Errors
///
/// Always `Unimplemented`.
pub fn is_linearly_independent<O: OperationSet>(_vectors: &[Vector<O>]) -> Result<bool> {
    Err(Error::Unimplemented("is_linearly_independent"))
}
