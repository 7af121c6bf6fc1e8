//! # Generic linear algebra and optimization
//!
//! Vectors and matrices over any element type for which an `OperationSet` provides the
//! arithmetic, the Hungarian algorithm for assignment problems and a two phase simplex method for
//! linear programs. The simplex method follows the book Combinatorial Optimization by Christos H.
//! Papadimitriou and Kenneth Steiglitz.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
