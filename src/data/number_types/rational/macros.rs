/// Shorthand for constructing a `RationalBig` in tests.
///
/// Panics when the denominator is zero.
#[cfg(test)]
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::from($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::RationalBig::new($numer, $denom)
            .expect("zero denominator")
    };
}
