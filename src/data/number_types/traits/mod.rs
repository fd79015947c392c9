//! # Traits
//!
//! The arithmetic contract that generic algorithms are written against.
use crate::data::number_types::error::ArithmeticError;

/// Something that can be added, subtracted, multiplied and divided like a number.
///
/// All operations borrow both operands and produce a new value; nothing is mutated. Only
/// division can fail, when the divisor is zero.
pub trait Number: Sized {
    fn add(&self, rhs: &Self) -> Self;
    fn subtract(&self, rhs: &Self) -> Self;
    fn multiply(&self, rhs: &Self) -> Self;
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` when `rhs` is zero.
    fn divide(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    fn square(&self) -> Self {
        self.multiply(self)
    }
}
