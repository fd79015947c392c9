//! # Interactions with fixed size integers
use std::ops::{Add, Mul};

use num::{BigInt, One};

use super::Big;

macro_rules! define_interactions {
    ($t:ident) => {
        mod $t {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Big {
                    fn from(value: $t) -> Self {
                        Self {
                            numerator: value.into(),
                            denominator: One::one(),
                        }
                    }
                }

                impl From<&$t> for Big {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Big {
                    fn eq(&self, other: &$t) -> bool {
                        self.denominator.is_one() && self.numerator == BigInt::from(*other)
                    }
                }
            }

            mod field {
                use super::*;

                impl Add<&$t> for Big {
                    type Output = Self;

                    fn add(self, rhs: &$t) -> Self::Output {
                        // gcd(n + d * k, d) = gcd(n, d), so no reduction is needed.
                        let Big { numerator, denominator } = self;
                        Self {
                            numerator: numerator + &denominator * BigInt::from(*rhs),
                            denominator,
                        }
                    }
                }

                impl Add<&$t> for &Big {
                    type Output = Big;

                    fn add(self, rhs: &$t) -> Self::Output {
                        self.clone().add(rhs)
                    }
                }

                impl Mul<&$t> for Big {
                    type Output = Big;

                    fn mul(self, rhs: &$t) -> Self::Output {
                        Big::reduced(self.numerator * BigInt::from(*rhs), self.denominator)
                    }
                }

                impl Mul<&$t> for &Big {
                    type Output = Big;

                    fn mul(self, rhs: &$t) -> Self::Output {
                        Big::reduced(&self.numerator * BigInt::from(*rhs), self.denominator.clone())
                    }
                }
            }
        }
    };
}

define_interactions!(i32);
define_interactions!(i64);
define_interactions!(i128);
define_interactions!(isize);
define_interactions!(u32);
define_interactions!(u64);
define_interactions!(u128);
define_interactions!(usize);
