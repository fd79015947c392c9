//! # Errors
use std::io;

use thiserror::Error;

/// The only way arithmetic in this crate can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// A zero denominator at construction, or a division by a zero valued number.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors surfaced to callers that also write output.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}
