//! # Vectors and matrices over different number types
use utensils::data::linear_algebra::matrix::Matrix;
use utensils::data::linear_algebra::vector::Vector;
use utensils::data::number_types::integer::IntegerOperations;
use utensils::data::number_types::modular::ModularOperations;
use utensils::data::number_types::rational::{rational, RationalOperations};
use utensils::error::Error;

fn rational_matrix(elements: &[i64], width: usize) -> Matrix<RationalOperations> {
    Matrix::from_elements(RationalOperations, elements.iter().map(|&v| rational(v, 1)).collect(), width).unwrap()
}

#[test]
fn rational_inverse() {
    let matrix = rational_matrix(&[2, 1, 1, 1], 2);
    let inverse = matrix.inverse().unwrap().unwrap();

    assert_eq!(inverse, rational_matrix(&[1, -1, -1, 2], 2));
    assert!(matrix.multiply(&inverse).unwrap().is_identity());
}

#[test]
fn singular() {
    let matrix = rational_matrix(&[1, 2, 2, 4], 2);
    assert_eq!(matrix.inverse(), Ok(None));
    assert_eq!(matrix.determinant(), Ok(rational(0, 1)));
}

#[test]
fn modular() {
    let operations = ModularOperations::new(7).unwrap();
    let shear = Matrix::from_elements(operations, vec![1, 1, 0, 1], 2).unwrap();
    assert_eq!(shear.order(10), Ok(7));

    let matrix = Matrix::from_elements(operations, vec![2, 1, 1, 1], 2).unwrap();
    let inverse = matrix.inverse().unwrap().unwrap();
    assert_eq!(inverse, Matrix::from_elements(operations, vec![1, 6, 6, 2], 2).unwrap());
}

#[test]
fn integer_determinant() {
    let matrix = Matrix::from_elements(IntegerOperations::<i64>::new(), vec![2, 0, 1, 1, 3, 2, 1, 1, 2], 3).unwrap();
    assert_eq!(matrix.determinant(), Ok(6));
    assert_eq!(matrix.transpose().determinant(), Ok(6));
}

#[test]
fn dimension_errors() {
    let operations = IntegerOperations::<i64>::new();
    let u = Vector::new(operations, vec![1, 2]);
    let v = Vector::new(operations, vec![1, 2, 3]);
    assert!(matches!(u.dot(&v), Err(Error::DimensionMismatch { .. })));

    let wide = Matrix::zeros(operations, 2, 3);
    assert!(matches!(wide.multiply(&wide), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(wide.determinant(), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(wide.get(2, 0), Err(Error::IndexOutOfBounds { index: 2, len: 2 })));
}
