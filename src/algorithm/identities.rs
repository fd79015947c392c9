//! # Algebraic identities
//!
//! Compute both sides of an identity through the `Number` contract alone and report them. The
//! checks are observational: both sides are written out and returned, nothing is asserted.
use std::fmt::Display;
use std::io::{self, Write};

use itertools::Itertools;
use tracing::debug;

use crate::data::number_types::traits::Number;

/// Both sides of `(a + b)^2 = a^2 + 2ab + b^2`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SumSquare<T> {
    /// `a + b`
    pub sum: T,
    /// `(a + b)^2`
    pub square_of_sum: T,
    /// `a^2 + 2ab + b^2`
    pub expanded: T,
}

impl<T: PartialEq> SumSquare<T> {
    pub fn holds(&self) -> bool {
        self.square_of_sum == self.expanded
    }
}

/// Both sides of `(a - b)(a + b) = a^2 - b^2`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct DifferenceOfSquares<T> {
    /// `(a - b)(a + b)`
    pub product: T,
    /// `a^2 - b^2`
    pub difference: T,
}

impl<T: PartialEq> DifferenceOfSquares<T> {
    pub fn holds(&self) -> bool {
        self.product == self.difference
    }
}

/// Compute and write out both sides of `(a + b)^2 = a^2 + 2ab + b^2`.
///
/// The twice-product is computed as `ab + ab` so that only the four operations are needed.
pub fn sum_square<T, W>(a: &T, b: &T, out: &mut W) -> io::Result<SumSquare<T>>
where
    T: Number + Display,
    W: Write,
{
    writeln!(out, "=== Testing (a+b)^2 = a^2 + 2ab + b^2 for a = {}, b = {} ===", a, b)?;
    let sum = a.add(b);
    writeln!(out, "a + b = {}", sum)?;
    let square_of_sum = sum.square();
    writeln!(out, "(a + b)^2 = {}", square_of_sum)?;

    let product = a.multiply(b);
    let twice_product = product.add(&product);
    let expanded = a.square().add(&twice_product).add(&b.square());
    writeln!(out, "a^2 + 2ab + b^2 = {}", expanded)?;
    writeln!(out, "=== Finished ===")?;

    debug!(%a, %b, %square_of_sum, %expanded, "computed sum square identity");
    Ok(SumSquare { sum, square_of_sum, expanded })
}

/// Compute and write out both sides of `(a - b)(a + b) = a^2 - b^2`.
pub fn difference_of_squares<T, W>(a: &T, b: &T, out: &mut W) -> io::Result<DifferenceOfSquares<T>>
where
    T: Number + Display,
    W: Write,
{
    writeln!(out, "=== Testing (a-b)*(a+b) = a^2 - b^2 for a = {}, b = {} ===", a, b)?;
    let product = a.subtract(b).multiply(&a.add(b));
    writeln!(out, "(a - b)*(a + b) = {}", product)?;

    let difference = a.square().subtract(&b.square());
    writeln!(out, "a^2 - b^2 = {}", difference)?;
    writeln!(out, "=== Finished ===")?;

    debug!(%a, %b, %product, %difference, "computed difference of squares identity");
    Ok(DifferenceOfSquares { product, difference })
}

/// Sort values ascending by their total order.
pub fn sort_ascending<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let sorted = values.into_iter().sorted().collect::<Vec<_>>();
    debug!(len = sorted.len(), "sorted values");
    sorted
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::data::number_types::complex::Complex;
    use crate::RB;

    use super::{difference_of_squares, sort_ascending, sum_square};

    #[test]
    fn sum_square_rational() {
        let mut out = Vec::new();
        let result = sum_square(&RB!(1, 3), &RB!(1, 6), &mut out).unwrap();

        assert_eq!(result.sum, RB!(1, 2));
        assert_eq!(result.square_of_sum, RB!(1, 4));
        assert!(result.holds());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Testing (a+b)^2 = a^2 + 2ab + b^2 for a = 1/3, b = 1/6 ===\n\
             a + b = 1/2\n\
             (a + b)^2 = 1/4\n\
             a^2 + 2ab + b^2 = 1/4\n\
             === Finished ===\n",
        );
    }

    #[test]
    fn difference_of_squares_complex() {
        let mut out = Vec::new();
        let result = difference_of_squares(
            &Complex::new(1.0, 3.0),
            &Complex::new(1.0, 6.0),
            &mut out,
        ).unwrap();

        assert_eq!(result.product, Complex::new(27.0, -6.0));
        assert!(result.holds());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Testing (a-b)*(a+b) = a^2 - b^2 for a = 1+3i, b = 1+6i ===\n\
             (a - b)*(a + b) = 27+-6i\n\
             a^2 - b^2 = 27+-6i\n\
             === Finished ===\n",
        );
    }

    #[test]
    fn negative_operands() {
        let result = difference_of_squares(&RB!(-2, 5), &RB!(7, -3), &mut std::io::sink()).unwrap();
        assert_eq!(result.product, RB!(-1189, 225));
        assert!(result.holds());
    }

    #[test]
    fn sort() {
        assert_eq!(
            sort_ascending(vec![RB!(3, 4), RB!(1, 2), RB!(5, 6)]),
            vec![RB!(1, 2), RB!(3, 4), RB!(5, 6)],
        );
        assert_eq!(
            sort_ascending(vec![RB!(1, -2), RB!(0, 1), RB!(-3, 4), RB!(2, 4)]),
            vec![RB!(-3, 4), RB!(-1, 2), RB!(0, 1), RB!(1, 2)],
        );
        assert!(sort_ascending(Vec::<u8>::new()).is_empty());
    }

    fn complex() -> impl Strategy<Value = Complex> {
        (-1e3..1e3, -1e3..1e3).prop_map(|(re, im)| Complex::new(re, im))
    }

    proptest! {
        #[test]
        fn complex_identities_within_tolerance(a in complex(), b in complex()) {
            let mut sink = std::io::sink();
            let scale = 1.0 + a.norm_sqr() + b.norm_sqr();

            let square = sum_square(&a, &b, &mut sink).unwrap();
            prop_assert!(square.square_of_sum.approx_eq(&square.expanded, 1e-9 * scale));
            let difference = difference_of_squares(&a, &b, &mut sink).unwrap();
            prop_assert!(difference.product.approx_eq(&difference.difference, 1e-9 * scale));
        }
    }
}
