//! # Complex numbers
//!
//! Double precision complex numbers. Arithmetic follows IEEE-754, so NaN and infinities
//! propagate; only division by an exact zero is rejected.
use std::fmt;
use std::ops::Neg;

use num::{One, Zero};

use crate::data::number_types::error::ArithmeticError;
use crate::data::number_types::traits::Number;

/// A complex number `re + im * i` with `f64` parts.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Complex(num::complex::Complex64);

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self(num::complex::Complex64::new(re, im))
    }

    pub fn re(&self) -> f64 {
        self.0.re
    }

    pub fn im(&self) -> f64 {
        self.0.im
    }

    /// `re² + im²`, the squared distance to the origin.
    pub fn norm_sqr(&self) -> f64 {
        self.0.norm_sqr()
    }

    pub fn conj(&self) -> Self {
        Self(self.0.conj())
    }

    /// Whether both parts differ from `other`'s by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.0.re - other.0.re).abs() <= tolerance && (self.0.im - other.0.im).abs() <= tolerance
    }
}

impl Number for Complex {
    fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    fn multiply(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    fn divide(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.norm_sqr() == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self(self.0 / rhs.0))
    }
}

forward_ring_ops!(Complex);

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self(num::complex::Complex64::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Complex {
    fn one() -> Self {
        Self(num::complex::Complex64::one())
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<num::complex::Complex64> for Complex {
    fn from(value: num::complex::Complex64) -> Self {
        Self(value)
    }
}

/// Renders `re+imi` by plain concatenation, a negative imaginary part gives e.g. `1+-3i`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.0.re, self.0.im)
    }
}
