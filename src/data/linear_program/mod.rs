//! # Representing linear programs
//!
//! A linear program is built from affine expressions of vector variables. Expressions are related
//! by constraints and a scalar goal function is maximized or minimized over them.
pub mod constraint;
pub mod elements;
pub mod expression;
pub mod function;
pub mod program;
pub mod solution;
