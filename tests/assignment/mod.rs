//! # Assigning workers to jobs
use std::collections::HashMap;

use utensils::algorithm::assignment::HungarianAlgorithm;
use utensils::data::linear_algebra::matrix::Matrix;
use utensils::data::number_types::integer::IntegerOperations;
use utensils::error::Error;

fn costs() -> Matrix<IntegerOperations<i64>> {
    Matrix::from_elements(
        IntegerOperations::new(),
        vec![
            9, 2, 7, 8,
            6, 4, 3, 7,
            5, 8, 1, 8,
            7, 6, 9, 4,
        ],
        4,
    ).unwrap()
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn minimize() {
    let workers = labels(&["alice", "bob", "carol", "dave"]);
    let jobs = labels(&["paint", "sand", "drill", "glue"]);
    let mut algorithm = HungarianAlgorithm::new(costs(), workers, jobs).unwrap();

    let assignment = algorithm.minimize().unwrap();
    let expected = [("alice", "sand"), ("bob", "paint"), ("carol", "drill"), ("dave", "glue")]
        .into_iter()
        .map(|(worker, job)| (worker.to_string(), job.to_string()))
        .collect::<HashMap<_, _>>();
    assert_eq!(assignment, expected);
    assert_eq!(algorithm.cost(), Ok(&13));
}

#[test]
fn convenience() {
    let assignment = costs().assign_jobs(vec![0, 1, 2, 3], vec!['a', 'b', 'c', 'd']).unwrap();
    assert_eq!(assignment.len(), 4);
    assert_eq!(assignment[&2], 'c');
}

#[test]
fn maximize_is_at_least_minimize() {
    let mut minimum = HungarianAlgorithm::new(costs(), vec![0, 1, 2, 3], vec![0, 1, 2, 3]).unwrap();
    minimum.minimize().unwrap();
    let mut maximum = HungarianAlgorithm::new(costs(), vec![0, 1, 2, 3], vec![0, 1, 2, 3]).unwrap();
    maximum.maximize().unwrap();

    assert!(maximum.cost().unwrap() >= minimum.cost().unwrap());
    let mut columns = maximum.assignment().unwrap().iter().map(|&(_, column)| column).collect::<Vec<_>>();
    columns.sort_unstable();
    assert_eq!(columns, vec![0, 1, 2, 3]);
}

#[test]
fn not_executed() {
    let algorithm = HungarianAlgorithm::new(costs(), vec![0, 1, 2, 3], vec![0, 1, 2, 3]).unwrap();
    assert!(algorithm.cost().unwrap_err().is_illegal_state());
}

#[test]
fn rejects_rectangular() {
    let matrix = Matrix::zeros(IntegerOperations::<i64>::new(), 2, 3);
    let result = HungarianAlgorithm::new(matrix, vec![0, 1], vec![0, 1, 2]);
    assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
}
