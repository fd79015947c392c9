//! # Arbitrary precision fractions
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use num::{BigInt, Integer, One, Signed, Zero};
use tracing::trace;

use crate::data::number_types::error::ArithmeticError;
use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::Number;

mod with_primitive;

/// A fraction of two unbounded integers, always stored in canonical form.
///
/// The denominator is strictly positive and shares no factor with the numerator. Because the
/// representation is unique, the derived equality and hash agree with numeric value.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Big {
    numerator: BigInt,
    denominator: BigInt,
}

impl Big {
    /// Create a fraction from any pair of integers that convert into a `BigInt`.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` if the denominator is zero.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, ArithmeticError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Bring a fraction into canonical form.
    ///
    /// Callers guarantee that `denominator` is nonzero.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        // The gcd is at least one, as the denominator is nonzero.
        let gcd = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = (numerator / &gcd, denominator / &gcd);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        trace!(%numerator, %denominator, %gcd, "reduced fraction");

        Self { numerator, denominator }
    }

    /// `1 / self`.
    ///
    /// # Errors
    ///
    /// `ArithmeticError::DivisionByZero` if `self` is zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }
}

impl Rational for Big {
    type Numerator = BigInt;
    type Denominator = BigInt;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

impl Number for Big {
    fn add(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn subtract(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn multiply(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn divide(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.numerator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::reduced(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }
}

forward_ring_ops!(Big);

impl Neg for Big {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Ord for Big {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross multiplying keeps the direction.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Big {
    fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Big {
    fn one() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }
}

impl From<BigInt> for Big {
    fn from(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }
}

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
