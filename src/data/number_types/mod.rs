//! # Number types
//!
//! Different algorithms are instantiated over different element types through an
//! `OperationSet`. This module defines that trait and provides implementations.
//!
//! A benefit of this approach is that the algorithms can be tested for correctness using exact
//! rational or modular numbers, while the same code is used without adaptation with floats.
pub mod traits;
pub mod float;
pub mod integer;
pub mod rational;
pub mod modular;
pub mod string;
