//! # Number types
//!
//! Exact and approximate number types that implement the `Number` contract.
#[macro_use]
mod macros;

pub mod complex;
pub mod error;
pub mod rational;
pub mod traits;
