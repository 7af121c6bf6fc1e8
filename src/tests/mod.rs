//! # Problems shared by the unit tests
//!
//! Convention for function names:
//!
//! * `fn create_program()`: the problem as a `LinearProgram`, with its variable
//! * `fn create_tableau()`: the problem as a `Tableau`
//! * `fn a()`, `fn vector()`: parts or helpers for building expected values
pub mod problem_3;
