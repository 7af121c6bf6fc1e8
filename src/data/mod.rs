//! # Data structures
//!
//! Number types, the vectors and matrices built on them and the representation of linear programs
//! in memory. Algorithms may introduce their specific data structures in `algorithm::my_algorithm`.

pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
