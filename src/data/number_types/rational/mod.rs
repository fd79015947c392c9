//! # Rational numbers
//!
//! Exact arithmetic on fractions of unbounded size.
pub use big::Big as RationalBig;

#[macro_use]
mod macros;
mod big;

/// Access to the parts of a fraction in its canonical form.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;
}
