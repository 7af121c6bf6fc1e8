//! # Strategies
//!
//! Decisions made during the simplex method that don't influence the result, only the path taken.
pub mod pivot_rule;
