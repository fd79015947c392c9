//! # numlike
//!
//! Two unrelated number types, an exact fraction and a floating point complex number, behind one
//! arithmetic contract. Generic algorithms in `algorithm` only see that contract.
pub mod algorithm;
pub mod data;

pub use data::number_types::complex::Complex;
pub use data::number_types::error::{ArithmeticError, Error};
pub use data::number_types::rational::{Rational, RationalBig};
pub use data::number_types::traits::Number;
