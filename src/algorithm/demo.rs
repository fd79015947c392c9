//! # Demonstration
//!
//! The fixed sequence the binary runs: both identities on a pair of fractions and a pair of
//! complex numbers, followed by sorting a few fractions.
use std::io::Write;

use tracing::info;

use crate::algorithm::identities::{difference_of_squares, sort_ascending, sum_square};
use crate::data::number_types::complex::Complex;
use crate::data::number_types::error::Error;
use crate::data::number_types::rational::RationalBig;

/// Write the full demonstration to `out`.
///
/// # Errors
///
/// When writing fails. The literal inputs never trigger an arithmetic error, but one would be
/// propagated as well.
pub fn run<W: Write>(out: &mut W) -> Result<(), Error> {
    let (a, b) = (RationalBig::new(1, 3)?, RationalBig::new(1, 6)?);
    let (c, d) = (Complex::new(1.0, 3.0), Complex::new(1.0, 6.0));

    info!("checking (a+b)^2 = a^2 + 2ab + b^2");
    sum_square(&a, &b, out)?;
    sum_square(&c, &d, out)?;

    info!("checking (a-b)*(a+b) = a^2 - b^2");
    difference_of_squares(&a, &b, out)?;
    difference_of_squares(&c, &d, out)?;

    let fractions = vec![
        RationalBig::new(3, 4)?,
        RationalBig::new(1, 2)?,
        RationalBig::new(5, 6)?,
    ];
    writeln!(out, "Sorted fractions:")?;
    for fraction in sort_ascending(fractions) {
        writeln!(out, "{}", fraction)?;
    }

    Ok(())
}
